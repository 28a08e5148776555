use std::thread;

/// Scoped handle for one frame of scene rendering. Created by
/// [`crate::LetterboxViewport::begin_frame`], which clears the scene texture;
/// record passes against [`Frame::view`] with `LoadOp::Load`, then drop the
/// frame (or call [`Frame::finish`]) to blit it into the window.
///
/// The blit runs on every exit path, so the offscreen target is never left
/// as the active destination between frames.
pub struct Frame<'a> {
    viewport: &'a mut crate::LetterboxViewport,
    renderer: &'a crate::Renderer,
    encoder: Option<wgpu::CommandEncoder>,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(viewport: &'a mut crate::LetterboxViewport, renderer: &'a crate::Renderer) -> Self {
        let descriptor = wgpu::CommandEncoderDescriptor { label: Some("letterbox frame") };
        let mut encoder = renderer.device.create_command_encoder(&descriptor);

        viewport.clear_scene(&mut encoder);

        Self { viewport, renderer, encoder: Some(encoder) }
    }

    /// The scene texture view to use as the color attachment for scene passes.
    pub fn view(&self) -> &wgpu::TextureView {
        self.viewport.scene_view()
    }

    pub fn encoder(&mut self) -> &mut wgpu::CommandEncoder {
        self.encoder.as_mut().unwrap()
    }

    /// End the frame eagerly instead of at end of scope.
    pub fn finish(mut self) {
        self.end();
    }

    fn end(&mut self) {
        if let Some(encoder) = self.encoder.take() {
            self.viewport.end_frame(self.renderer, encoder);
        }
    }
}

impl Drop for Frame<'_> {
    fn drop(&mut self) {
        // Presenting mid-unwind could panic again and abort; drop the
        // recorded commands instead.
        if thread::panicking() {
            self.encoder.take();
            return;
        }

        self.end();
    }
}
