/// WGSL shader for the additive-blended particle cloud (point list).
pub const PARTICLE_SHADER: &str = r#"
struct CloudUniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    misc: vec4<f32>, // x = opacity
};

@group(0) @binding(0)
var<uniform> cloud: CloudUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = cloud.view_proj * cloud.model * vec4<f32>(vertex.position, 1.0);
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(in.color, cloud.misc.x);
}
"#;

/// WGSL shader for the wireframe shapes (line list). Brightness combines the
/// ambient term with distance-attenuated contributions from two point lights.
pub const SHAPE_SHADER: &str = r#"
struct ShapeUniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    color: vec4<f32>,        // rgb + proximity opacity
    ambient: vec4<f32>,      // x = ambient intensity
    light0_pos: vec4<f32>,   // xyz = position, w = range
    light0_color: vec4<f32>,
    light1_pos: vec4<f32>,
    light1_color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> shape: ShapeUniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VertexOutput {
    let world = shape.model * vec4<f32>(position, 1.0);
    var out: VertexOutput;
    out.clip_position = shape.view_proj * world;
    out.world_pos = world.xyz;
    return out;
}

fn light_contribution(pos: vec4<f32>, color: vec4<f32>, world: vec3<f32>) -> vec3<f32> {
    let attenuation = max(1.0 - distance(world, pos.xyz) / pos.w, 0.0);
    return color.rgb * attenuation;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    var lit = vec3<f32>(shape.ambient.x);
    lit += light_contribution(shape.light0_pos, shape.light0_color, in.world_pos);
    lit += light_contribution(shape.light1_pos, shape.light1_color, in.world_pos);
    return vec4<f32>(shape.color.rgb * lit, shape.color.a);
}
"#;
