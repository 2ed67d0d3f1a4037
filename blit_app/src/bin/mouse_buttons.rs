use blit_lib::demos::mouse_buttons::MouseButtons;

fn main() {
    blit_app::launch(|stage| stage.play::<MouseButtons<_>>());
}
