use bytemuck::{Pod, Zeroable};

use crate::draw::DrawCommand;

pub const CIRCLE_SHADER: &str = include_str!("circles.wgsl");

/// Per-instance vertex data for one circle.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad0: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x2, // center
        },
        wgpu::VertexAttribute {
            offset: 8,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32, // radius
        },
        wgpu::VertexAttribute {
            offset: 16,
            shader_location: 2,
            format: wgpu::VertexFormat::Float32x4, // color
        },
    ];
}

impl From<&DrawCommand> for CircleInstance {
    fn from(cmd: &DrawCommand) -> Self {
        Self {
            center: cmd.center.to_array(),
            radius: cmd.radius,
            _pad0: 0.0,
            color: cmd.color.to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub viewport: [f32; 2],
    pub _padding: [f32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Rgba;
    use glam::Vec2;

    /// Validates WGSL code using naga.
    fn validate_wgsl(code: &str) -> Result<(), String> {
        let module = naga::front::wgsl::parse_str(code)
            .map_err(|e| format!("WGSL parse error: {:?}", e))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| format!("WGSL validation error: {:?}", e))?;

        Ok(())
    }

    #[test]
    fn test_circle_shader_validates() {
        validate_wgsl(CIRCLE_SHADER).expect("Circle shader should be valid");
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 32);
        assert_eq!(std::mem::size_of::<Uniforms>(), 16);

        let offsets: Vec<u64> = CircleInstance::ATTRIBUTES.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 8, 16]);
    }

    #[test]
    fn test_instance_from_command() {
        let cmd = DrawCommand {
            center: Vec2::new(12.0, 34.0),
            radius: 2.5,
            color: Rgba::new(0.1, 0.2, 0.3, 0.4),
        };
        let inst = CircleInstance::from(&cmd);
        assert_eq!(inst.center, [12.0, 34.0]);
        assert_eq!(inst.radius, 2.5);
        assert_eq!(inst.color, [0.1, 0.2, 0.3, 0.4]);
    }
}
