//! Validates the bundled WGSL programs with naga
//!
//! Runs without a GPU. Catches syntax and type errors in the shader files
//! and checks that the uniform block layout matches the Rust struct.

use std::path::PathBuf;

use efield_render::pipeline::FieldUniforms;
use efield_render::shader::{ShaderSources, FRAGMENT_ENTRY, SHADER_FILES, VERTEX_ENTRY};

fn shader_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../shaders")
}

fn parse_and_validate(name: &str, source: &str) -> Result<naga::Module, String> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| format!("{name}: WGSL parse error: {}", e.emit_to_string(source)))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| format!("{name}: WGSL validation error: {:?}", e))?;

    Ok(module)
}

fn has_entry_point(module: &naga::Module, name: &str, stage: naga::ShaderStage) -> bool {
    module
        .entry_points
        .iter()
        .any(|ep| ep.name == name && ep.stage == stage)
}

#[test]
fn test_all_shaders_validate() {
    let sources = ShaderSources::load(shader_dir()).expect("bundled shaders should load");
    for name in SHADER_FILES {
        let source = sources.get(name).unwrap();
        parse_and_validate(name, source).unwrap();
    }
}

#[test]
fn test_entry_points() {
    let sources = ShaderSources::load(shader_dir()).unwrap();
    for name in SHADER_FILES {
        let module = parse_and_validate(name, sources.get(name).unwrap()).unwrap();
        let (entry, stage) = if name.ends_with(".vert") {
            (VERTEX_ENTRY, naga::ShaderStage::Vertex)
        } else {
            (FRAGMENT_ENTRY, naga::ShaderStage::Fragment)
        };
        assert!(
            has_entry_point(&module, entry, stage),
            "{name} is missing {entry}"
        );
    }
}

#[test]
fn test_uniform_block_matches_rust_layout() {
    let sources = ShaderSources::load(shader_dir()).unwrap();
    for name in ["shader1.vert", "shader2.vert"] {
        let module = parse_and_validate(name, sources.get(name).unwrap()).unwrap();
        let span = module
            .types
            .iter()
            .find_map(|(_, ty)| match (&ty.name, &ty.inner) {
                (Some(n), naga::TypeInner::Struct { span, .. }) if n == "FieldUniforms" => {
                    Some(*span)
                }
                _ => None,
            })
            .unwrap_or_else(|| panic!("{name} does not declare FieldUniforms"));
        assert_eq!(span as usize, std::mem::size_of::<FieldUniforms>(), "{name}");
    }
}

#[test]
fn test_broken_shader_rejected() {
    let source = "@vertex fn vs_main() -> @builtin(position) vec4<f32> { return 1.0; }";
    assert!(parse_and_validate("broken.vert", source).is_err());
}
