use blit_lib::demos::hello::Hello;

fn main() {
    blit_app::launch(|stage| stage.play::<Hello<_>>());
}
