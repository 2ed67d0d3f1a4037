use blit_lib::demos::stretch::Stretch;

fn main() {
    blit_app::launch(|stage| stage.play::<Stretch<_>>());
}
