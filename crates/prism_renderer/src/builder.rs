//! Build a renderable scene from a loaded description.

use std::collections::BTreeMap;
use std::sync::Arc;

use prism_core::{
    load_obj, LightDescription, LoadError, LoadResult, Material, SceneDescription,
};
use prism_math::Vec3;

use crate::light::{LightSource, PointLight};
use crate::primitive::Primitive;
use crate::{Camera, Scene, Triangle};

/// Turn a scene description into primitives and lights.
///
/// Meshes are loaded from disk in description order, followed by the inline
/// triangles, so primitive order (and with it tie-breaking between coincident
/// hits) follows the file. Degenerate triangles are dropped.
pub fn build_scene(description: &SceneDescription) -> LoadResult<Scene> {
    description.validate()?;

    let materials: BTreeMap<&str, Arc<Material>> = description
        .materials
        .iter()
        .map(|(name, material)| (name.as_str(), Arc::new(material.clone())))
        .collect();
    let material = |name: &str| {
        materials
            .get(name)
            .cloned()
            .ok_or_else(|| LoadError::UnknownMaterial(name.to_string()))
    };

    let mut primitives: Vec<Box<dyn Primitive>> = Vec::new();
    let mut skipped = 0usize;
    let mut push_triangle = |[v0, v1, v2]: [Vec3; 3], material: &Arc<Material>| {
        if Triangle::is_degenerate(v0, v1, v2) {
            skipped += 1;
        } else {
            primitives.push(Box::new(Triangle::new(v0, v1, v2, Arc::clone(material))));
        }
    };

    for instance in &description.meshes {
        let mesh_material = material(&instance.material)?;
        let mesh = load_obj(&instance.path, instance.position, instance.scale)?;
        for vertices in mesh.triangles() {
            push_triangle(vertices, &mesh_material);
        }
    }

    for triangle in &description.triangles {
        push_triangle(triangle.vertices, &material(&triangle.material)?);
    }

    if skipped > 0 {
        log::warn!("Skipped {} degenerate triangles", skipped);
    }

    let lights: Vec<Box<dyn LightSource>> = description
        .lights
        .iter()
        .map(|light| match light {
            LightDescription::Point { position } => {
                Box::new(PointLight::new(*position)) as Box<dyn LightSource>
            }
        })
        .collect();

    log::info!(
        "Built scene: {} primitives, {} lights",
        primitives.len(),
        lights.len()
    );

    Ok(Scene::new(primitives, lights)?)
}

/// Camera for the description's raster size.
pub fn build_camera(description: &SceneDescription) -> Camera {
    Camera::from_settings(
        &description.camera,
        description.render.width,
        description.render.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::TriangleDescription;
    use prism_math::Ray;

    fn description(json: &str) -> SceneDescription {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_build_inline_triangles() {
        let description = description(
            r#"{
                "materials": {
                    "red": { "diffuse_color": [255, 0, 0] },
                    "blue": { "diffuse_color": [0, 0, 255] }
                },
                "triangles": [
                    { "vertices": [[-1,-1,-3],[1,-1,-3],[0,1,-3]], "material": "red" },
                    { "vertices": [[-1,-1,-5],[1,-1,-5],[0,1,-5]], "material": "blue" }
                ],
                "lights": [ { "type": "point", "position": [0, 0, 0] } ]
            }"#,
        );
        let scene = build_scene(&description).unwrap();

        assert_eq!(scene.primitives().len(), 2);
        assert_eq!(scene.lights().len(), 1);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.find_closest(&ray, f32::INFINITY).unwrap();
        assert_eq!(hit.primitive.material().diffuse_color, Vec3::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn test_degenerate_triangles_skipped() {
        let description = description(
            r#"{
                "materials": { "m": {} },
                "triangles": [
                    { "vertices": [[0,0,0],[1,0,0],[2,0,0]], "material": "m" },
                    { "vertices": [[0,0,0],[1,0,0],[0,1,0]], "material": "m" }
                ],
                "lights": [ { "type": "point", "position": [0, 0, 5] } ]
            }"#,
        );
        let scene = build_scene(&description).unwrap();
        assert_eq!(scene.primitives().len(), 1);
    }

    #[test]
    fn test_lights_converted() {
        let description = description(
            r#"{
                "lights": [
                    { "type": "point", "position": [0, 10, 0] },
                    { "type": "point", "position": [5, 0, 0] }
                ]
            }"#,
        );
        let scene = build_scene(&description).unwrap();

        assert_eq!(scene.lights().len(), 2);
        assert_eq!(
            scene.lights()[0].light_vector(Vec3::ZERO),
            Vec3::new(0.0, 10.0, 0.0)
        );
    }

    #[test]
    fn test_rejects_no_lights() {
        let description = SceneDescription::default();
        assert!(matches!(build_scene(&description), Err(LoadError::NoLights)));
    }

    #[test]
    fn test_rejects_unknown_material() {
        let mut description = description(
            r#"{ "lights": [ { "type": "point", "position": [0, 0, 0] } ] }"#,
        );
        description.triangles.push(TriangleDescription {
            vertices: [Vec3::ZERO, Vec3::X, Vec3::Y],
            material: "nope".into(),
        });

        assert!(matches!(
            build_scene(&description),
            Err(LoadError::UnknownMaterial(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_missing_mesh_file() {
        let description = description(
            r#"{
                "materials": { "m": {} },
                "meshes": [ { "path": "/definitely/not/here.obj", "material": "m" } ],
                "lights": [ { "type": "point", "position": [0, 0, 0] } ]
            }"#,
        );
        assert!(build_scene(&description).is_err());
    }

    #[test]
    fn test_build_mesh_from_file() {
        let dir = std::env::temp_dir().join(format!("prism_builder_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let obj_path = dir.join("quad.obj");
        std::fs::write(&obj_path, "v -1 -1 0\nv 1 -1 0\nv 1 1 0\nv -1 1 0\nf 1 2 3 4\n").unwrap();

        let json = format!(
            r#"{{
                "materials": {{ "m": {{}} }},
                "meshes": [ {{ "path": {:?}, "position": [0, 0, -4], "material": "m" }} ],
                "lights": [ {{ "type": "point", "position": [0, 0, 0] }} ]
            }}"#,
            obj_path.to_string_lossy()
        );
        let scene = build_scene(&description(&json)).unwrap();

        assert_eq!(scene.primitives().len(), 2);
        assert_eq!(scene.bounds().min(), Vec3::new(-1.0, -1.0, -4.0));
        assert_eq!(scene.bounds().max(), Vec3::new(1.0, 1.0, -4.0));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_build_demo_scene() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../scenes/pyramid.json");
        let description = prism_core::load_description(path).unwrap();
        let scene = build_scene(&description).unwrap();

        // 2 triangles for the base quad, 4 sides, 2 floor triangles
        assert_eq!(scene.primitives().len(), 8);
        assert_eq!(scene.lights().len(), 2);
    }

    #[test]
    fn test_build_camera_uses_raster_size() {
        let description = description(
            r#"{
                "render": { "width": 30, "height": 20 },
                "lights": [ { "type": "point", "position": [0, 0, 0] } ]
            }"#,
        );
        let camera = build_camera(&description);

        assert_eq!(camera.plane().columns(), 30);
        assert_eq!(camera.plane().rows(), 20);
    }
}
