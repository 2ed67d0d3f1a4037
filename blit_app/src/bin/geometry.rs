use blit_lib::demos::geometry::Geometry;

fn main() {
    blit_app::launch(|stage| stage.play::<Geometry>());
}
