use blit_lib::demos::viewport::Viewport;

fn main() {
    blit_app::launch(|stage| stage.play::<Viewport<_>>());
}
