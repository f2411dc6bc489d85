use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GpuError {
    NoAdapter,
    DeviceCreation(wgpu::RequestDeviceError),
    ShaderCompilation(String),
    BufferMap(wgpu::BufferAsyncError),
    TableTooLong { length: usize, max: u32 },
    GridTooLarge { bytes: u64, max: u32 },
    Unavailable(String),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAdapter => write!(f, "no GPU adapter found"),
            Self::DeviceCreation(err) => write!(f, "failed to create device: {}", err),
            Self::ShaderCompilation(msg) => write!(f, "escape-time program rejected: {}", msg),
            Self::BufferMap(err) => write!(f, "buffer mapping failed: {}", err),
            Self::TableTooLong { length, max } => {
                write!(
                    f,
                    "colour table of {} entries exceeds the device texture limit of {}",
                    length, max
                )
            }
            Self::GridTooLarge { bytes, max } => {
                write!(
                    f,
                    "pixel grid of {} bytes exceeds the device storage limit of {}",
                    bytes, max
                )
            }
            Self::Unavailable(reason) => write!(f, "GPU unavailable: {}", reason),
        }
    }
}

impl Error for GpuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DeviceCreation(err) => Some(err),
            Self::BufferMap(err) => Some(err),
            _ => None,
        }
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(err: wgpu::RequestDeviceError) -> Self {
        Self::DeviceCreation(err)
    }
}

impl From<wgpu::BufferAsyncError> for GpuError {
    fn from(err: wgpu::BufferAsyncError) -> Self {
        Self::BufferMap(err)
    }
}
