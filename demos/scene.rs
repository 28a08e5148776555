use winit::{dpi, event, event_loop, window};

const SCENE_WIDTH: u32 = 320;
const SCENE_HEIGHT: u32 = 180;

fn main() {
    env_logger::init();

    let event_loop = event_loop::EventLoop::new();
    let window = window::WindowBuilder::new()
        .with_title("letterbox")
        .with_inner_size(dpi::LogicalSize::new(1280., 720.))
        .build(&event_loop)
        .unwrap();

    let mut renderer = letterbox::Renderer::new(&window);
    let scene_size = letterbox::SceneSize::new(SCENE_WIDTH, SCENE_HEIGHT);
    let mut viewport = letterbox::LetterboxViewport::new(&renderer, scene_size, false);

    // A non-black scene makes the bars visible when the window is resized
    // away from 16:9.
    viewport.clear_color = letterbox::ClearColor::new(0.2, 0.1, 0.4, 1.);

    event_loop.run(move |event, _, control_flow| {
        match event {
            event::Event::RedrawRequested(_) => {
                let frame = viewport.begin_frame(&renderer);

                // Scene passes would target frame.view() with LoadOp::Load
                // here. Dropping the frame blits it into the window.
                drop(frame);
            },
            event::Event::MainEventsCleared => {
                window.request_redraw();
            },
            event::Event::WindowEvent { event, .. } => match event {
                event::WindowEvent::Resized(size) => {
                    renderer.resize(&size);
                    viewport.resize(&size);
                },
                event::WindowEvent::ScaleFactorChanged { new_inner_size: size, .. } => {
                    renderer.resize(size);
                    viewport.resize(size);
                },
                event::WindowEvent::CloseRequested => {
                    *control_flow = event_loop::ControlFlow::Exit;
                },
                _ => {},
            },
            _ => {},
        }
    });
}
