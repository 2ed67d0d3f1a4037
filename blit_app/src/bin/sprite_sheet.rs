use blit_lib::demos::sprite_sheet::SpriteSheetDemo;

fn main() {
    blit_app::launch(|stage| stage.play::<SpriteSheetDemo<_>>());
}
