use futures::executor;
use winit::{dpi, window};

pub struct Renderer {
    pub window_size: dpi::PhysicalSize<u32>,
    pub surface: wgpu::Surface,
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub surface_format: wgpu::TextureFormat,
}

impl Renderer {
    pub fn new(window: &window::Window) -> Self {
        let window_size = window.inner_size();
        let instance = create_instance();
        let surface = unsafe { instance.create_surface(window) }.unwrap();
        let adapter = get_adapter(&instance, &surface);
        let (device, queue) = get_device(&adapter);

        let surface_format = surface.get_capabilities(&adapter).formats[0];
        let config = surface_config(&window_size, surface_format);
        surface.configure(&device, &config);

        log::info!("renderer: adapter {}, surface {:?}", adapter.get_info().name, surface_format);

        Self { window_size, surface, adapter, device, queue, config, surface_format }
    }

    pub fn resize(&mut self, new_size: &dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 { return; }

        self.window_size = *new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn acquire_frame(&self) -> wgpu::SurfaceTexture {
        match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(_) => {
                // Outdated or lost surface, reconfigure once and retry.
                self.surface.configure(&self.device, &self.config);
                self.surface.get_current_texture().unwrap()
            },
        }
    }
}

fn create_instance() -> wgpu::Instance {
    let descriptor = wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    };

    wgpu::Instance::new(descriptor)
}

fn get_adapter(instance: &wgpu::Instance, surface: &wgpu::Surface) -> wgpu::Adapter {
    let options = wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::default(),
        compatible_surface: Some(surface),
        force_fallback_adapter: false,
    };

    executor::block_on(instance.request_adapter(&options)).unwrap()
}

fn get_device(adapter: &wgpu::Adapter) -> (wgpu::Device, wgpu::Queue) {
    let descriptor = wgpu::DeviceDescriptor::default();

    executor::block_on(adapter.request_device(&descriptor, None)).unwrap()
}

fn surface_config(window_size: &dpi::PhysicalSize<u32>, format: wgpu::TextureFormat) -> wgpu::SurfaceConfiguration {
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: window_size.width,
        height: window_size.height,
        present_mode: wgpu::PresentMode::Fifo, // Enable vsync
        alpha_mode: wgpu::CompositeAlphaMode::Opaque,
        view_formats: vec![],
    }
}
