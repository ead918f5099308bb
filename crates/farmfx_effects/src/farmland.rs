//! Soil plot and plants under the weather

use farmfx_core::{Canvas, Color, FrameContext, SimState};

/// Thickness of the soil slab
pub const SOIL_DEPTH: f32 = 20.0;
/// Radius of a plant marker
pub const PLANT_RADIUS: f32 = 10.0;

const SOIL_COLOR: Color = Color::rgb(110.0, 80.0, 50.0);
const PLANT_COLOR: Color = Color::rgb(70.0, 160.0, 60.0);
const CHARRED_COLOR: Color = Color::rgb(40.0, 30.0, 25.0);

/// Draw the soil slab on the ground plane and a marker per plant
pub fn display(canvas: &mut dyn Canvas, ctx: &FrameContext, sim: &SimState) {
    let side = sim.box_len * 2.0;

    canvas.push();
    canvas.no_stroke();
    canvas.translate(0.0, ctx.ground_y() + SOIL_DEPTH / 2.0, 0.0);
    canvas.ambient_material(SOIL_COLOR);
    canvas.box_shape(side, SOIL_DEPTH, side);
    canvas.pop();

    for (_, plant) in sim.garden.iter() {
        let p = plant.position;
        canvas.push();
        canvas.no_stroke();
        canvas.translate(p.x, p.y - PLANT_RADIUS, p.z);
        canvas.ambient_material(if plant.scorched { CHARRED_COLOR } else { PLANT_COLOR });
        canvas.sphere(PLANT_RADIUS);
        canvas.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmfx_core::{DrawList, Garden, Plant, Primitive, Shape, Vec3};

    #[test]
    fn test_slab_spans_box_len() {
        let ctx = FrameContext::new(800.0, 600.0);
        let sim = SimState::new().with_box_len(150.0);
        let mut list = DrawList::new();
        display(&mut list, &ctx, &sim);
        assert_eq!(list.len(), 1);
        match &list.primitives()[0] {
            Primitive::Solid { shape, transform, .. } => {
                assert_eq!(*shape, Shape::Box { width: 300.0, height: SOIL_DEPTH, depth: 300.0 });
                assert_eq!(transform[3][1], 120.0 + SOIL_DEPTH / 2.0);
            }
            other => panic!("expected soil, got {:?}", other),
        }
    }

    #[test]
    fn test_scorched_plants_are_charred() {
        let mut garden = Garden::new();
        let key = garden.add(Plant::new("bean", Vec3::new(0.0, 120.0, 0.0)));
        garden.add(Plant::new("pea", Vec3::new(50.0, 120.0, 0.0)));
        garden.get_mut(key).unwrap().struck_by_lightning(5.0);

        let sim = SimState::new().with_garden(garden);
        let mut list = DrawList::new();
        display(&mut list, &FrameContext::new(800.0, 600.0), &sim);

        let colors: Vec<Color> = list
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Solid { shape: Shape::Sphere { .. }, surface, .. } => Some(surface.color),
                _ => None,
            })
            .collect();
        assert_eq!(colors.len(), 2);
        assert!(colors.contains(&CHARRED_COLOR));
        assert!(colors.contains(&PLANT_COLOR));
    }
}
