/// The offscreen target the scene renders into. Its pixel dimensions are
/// fixed at creation and never change on window resize.
pub struct SceneTexture {
    pub inner: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub size: crate::SceneSize,
}

impl SceneTexture {
    pub fn new(device: &wgpu::Device, size: crate::SceneSize, filter_mode: crate::FilterMode) -> Self {
        let inner = create_texture(device, size);
        let view = inner.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_sampler(device, filter_mode);

        Self { inner, view, sampler, size }
    }
}

fn create_texture(device: &wgpu::Device, size: crate::SceneSize) -> wgpu::Texture {
    let descriptor = wgpu::TextureDescriptor {
        label: Some("scene texture"),
        size: size.extent(),
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    };

    device.create_texture(&descriptor)
}

fn create_sampler(device: &wgpu::Device, filter_mode: crate::FilterMode) -> wgpu::Sampler {
    let descriptor = wgpu::SamplerDescriptor {
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        mag_filter: filter_mode.to_wgpu(),
        min_filter: filter_mode.to_wgpu(),
        ..Default::default()
    };

    device.create_sampler(&descriptor)
}
