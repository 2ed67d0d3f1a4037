use blit_lib::demos::key_presses::KeyPresses;

fn main() {
    blit_app::launch(|stage| stage.play::<KeyPresses<_>>());
}
