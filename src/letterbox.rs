use winit::dpi;

/// A fixed-resolution surface scaled and centered into the window, with
/// black bars filling the leftover space.
///
/// The scene renders into an offscreen texture between `begin_frame` and the
/// end of the returned [`crate::Frame`]; dropping the frame blits the texture
/// into the window per the current geometry.
pub struct LetterboxViewport {
    pub clear_color: crate::ClearColor,
    scene_size: crate::SceneSize,
    texture: crate::SceneTexture,
    pipeline: crate::BlitPipeline,
    texture_bind_group: wgpu::BindGroup,
    geometry: crate::Viewport,
    window_size: dpi::PhysicalSize<u32>,
}

impl LetterboxViewport {
    pub fn new(renderer: &crate::Renderer, scene_size: crate::SceneSize, smooth_scaling: bool) -> Self {
        let filter_mode = crate::FilterMode::from_smooth_scaling(smooth_scaling);
        let texture = crate::SceneTexture::new(&renderer.device, scene_size, filter_mode);
        let pipeline = crate::BlitPipeline::new(&renderer.device, renderer.surface_format);
        let texture_bind_group = pipeline.bind_texture(&renderer.device, &texture);

        let window_size = renderer.window_size;
        let geometry = crate::Viewport::new(scene_size, window_size);
        let clear_color = crate::ClearColor::black();

        log::info!(
            "letterbox viewport: scene {}x{}, window {}x{}",
            scene_size.width, scene_size.height, window_size.width, window_size.height,
        );

        Self { clear_color, scene_size, texture, pipeline, texture_bind_group, geometry, window_size }
    }

    /// Call from the host's resize event. Only the geometry is recomputed
    /// here; it is consumed at the end of the next frame.
    pub fn resize(&mut self, new_size: &dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 { return; }

        self.window_size = *new_size;
        self.geometry = crate::Viewport::new(self.scene_size, *new_size);

        log::debug!("letterbox geometry: {:?}", self.geometry);
    }

    pub fn begin_frame<'a>(&'a mut self, renderer: &'a crate::Renderer) -> crate::Frame<'a> {
        crate::Frame::new(self, renderer)
    }

    pub fn scene_size(&self) -> crate::SceneSize {
        self.scene_size
    }

    pub fn scene_view(&self) -> &wgpu::TextureView {
        &self.texture.view
    }

    pub fn geometry(&self) -> &crate::Viewport {
        &self.geometry
    }

    pub(crate) fn clear_scene(&self, encoder: &mut wgpu::CommandEncoder) {
        let color_attachments = [Some(wgpu::RenderPassColorAttachment {
            view: &self.texture.view,
            resolve_target: None,
            ops: wgpu::Operations { load: wgpu::LoadOp::Clear(self.clear_color.inner), store: true },
        })];
        let descriptor = wgpu::RenderPassDescriptor {
            label: Some("scene clear"),
            color_attachments: &color_attachments,
            depth_stencil_attachment: None,
        };

        let pass = encoder.begin_render_pass(&descriptor);
        drop(pass);
    }

    pub(crate) fn end_frame(&self, renderer: &crate::Renderer, mut encoder: wgpu::CommandEncoder) {
        let output = renderer.acquire_frame();
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        self.pipeline.blit(
            &renderer.queue,
            &mut encoder,
            &view,
            &self.texture_bind_group,
            &self.geometry,
            self.window_size,
            crate::ClearColor::black(),
        );

        renderer.queue.submit(Some(encoder.finish()));
        output.present();
    }
}
