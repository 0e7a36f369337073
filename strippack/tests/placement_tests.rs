#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use rand::prelude::SmallRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use strippack::entities::{Item, SPInstance, Strip};
    use strippack::geometry::geo_traits::Shape;
    use strippack::geometry::primitives::Rect;
    use strippack::placement::{bl_pack, bl_place};
    use strippack::util::assertions;
    use test_case::test_case;

    fn rect(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Rect {
        Rect::try_new(x_min, y_min, x_max, y_max).unwrap()
    }

    fn random_items(n: usize, max_dim: i32, rng: &mut SmallRng) -> Vec<Item> {
        (0..n)
            .map(|id| Item::new(id, rng.random_range(1..=max_dim), rng.random_range(1..=max_dim)))
            .collect()
    }

    #[test]
    fn three_squares_fill_two_rows() {
        let strip = Strip::new(20).unwrap();
        let items = vec![Item::new(1, 10, 10), Item::new(2, 10, 10), Item::new(3, 10, 10)];

        let layout = bl_pack(&items, strip).unwrap();
        let placed = layout.placed_items();

        assert_eq!(placed[0].rect(), rect(0, 0, 10, 10));
        assert_eq!(placed[1].rect(), rect(10, 0, 20, 10));
        assert_eq!(placed[2].rect(), rect(0, 10, 10, 20));
        assert_eq!(layout.height(), 20);
        assert!(approx_eq!(f32, layout.fitness(), 0.75, ulps = 2));
    }

    #[test_case(1, 1; "unit")]
    #[test_case(7, 3; "wide")]
    #[test_case(3, 40; "tall")]
    #[test_case(100, 100; "full width")]
    fn single_item_lands_in_origin(width: i32, height: i32) {
        let strip = Strip::new(100).unwrap();
        let layout = bl_pack(&[Item::new(1, width, height)], strip).unwrap();

        assert_eq!(layout.placed_items()[0].rect(), rect(0, 0, width, height));
        assert_eq!(layout.height(), height);
        let expected = (width * height) as f32 / (height * 100) as f32;
        assert!(approx_eq!(f32, layout.fitness(), expected, ulps = 2));
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let strip = Strip::new(100).unwrap();
        assert!(bl_pack(&[], strip).is_err());
    }

    #[test]
    fn input_positions_are_ignored() {
        let strip = Strip::new(20).unwrap();
        let mut moved = Item::new(1, 10, 10);
        moved.set_left(55);
        moved.set_bottom(-3);

        let layout = bl_pack(&[moved, Item::new(2, 5, 5)], strip).unwrap();
        assert_eq!(layout.placed_items()[0].rect(), rect(0, 0, 10, 10));
        assert_eq!(layout.placed_items()[1].rect(), rect(10, 0, 15, 5));
    }

    #[test]
    fn item_stacks_on_shorter_neighbour() {
        // a tall item on the left and a flat one on the right: the third item stacks on the flat one
        let strip = Strip::new(30).unwrap();
        let items = vec![Item::new(1, 10, 30), Item::new(2, 20, 5), Item::new(3, 20, 10)];

        let layout = bl_pack(&items, strip).unwrap();
        let placed = layout.placed_items();
        assert_eq!(placed[1].rect(), rect(10, 0, 30, 5));
        assert_eq!(placed[2].rect(), rect(10, 5, 30, 15));
        assert_eq!(layout.height(), 30);
    }

    #[test]
    fn bl_place_rests_on_support() {
        let strip = Strip::new(10).unwrap();
        let mut base = Item::new(1, 10, 4);
        base.set_left(0);
        base.set_bottom(0);

        let placed = bl_place(Item::new(2, 3, 3), &[base], strip);
        assert_eq!(placed.rect(), rect(0, 4, 3, 7));
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(2; "seed 2")]
    #[test_case(3; "seed 3")]
    fn random_sequences_are_collision_free(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let strip = Strip::new(100).unwrap();
        let mut items = random_items(60, 45, &mut rng);

        for _ in 0..5 {
            items.shuffle(&mut rng);
            for item in items.iter_mut() {
                if rng.random_bool(0.3) {
                    item.rotate();
                }
            }
            let layout = bl_pack(&items, strip).unwrap();

            assert!(assertions::layout_is_collision_free(&layout));
            assert!(assertions::layout_is_anchored(&layout));
            assert!(assertions::items_are_permutation(&items, layout.placed_items()));
            let fitness = layout.fitness();
            assert!(fitness > 0.0 && fitness <= 1.0, "fitness out of range: {fitness}");
        }
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(2; "seed 2")]
    #[test_case(3; "seed 3")]
    fn lifted_items_rest_on_a_supporting_item(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let strip = Strip::new(100).unwrap();

        for _ in 0..20 {
            let items = random_items(40, 45, &mut rng);
            let layout = bl_pack(&items, strip).unwrap();
            let placed = layout.placed_items();

            for item in placed.iter().filter(|pi| pi.bottom() > 0) {
                let supported = placed
                    .iter()
                    .any(|other| other.top() == item.bottom() && other.rect().x_overlaps(&item.rect()));
                assert!(supported, "item {} floats at y = {}", item.id, item.bottom());
            }
        }
    }

    #[test_case(vec![(10, 10); 3], 20, 15; "area bound rounds up")]
    #[test_case(vec![(10, 10); 3], 30, 10; "area bound divides exactly")]
    #[test_case(vec![(5, 40)], 100, 5; "smallest side of the tallest item")]
    fn height_lower_bound(dims: Vec<(i32, i32)>, strip_width: i32, expected: i32) {
        let items = dims
            .into_iter()
            .enumerate()
            .map(|(id, (w, h))| Item::new(id, w, h))
            .collect();
        let instance = SPInstance::new("bound".into(), items, Strip::new(strip_width).unwrap()).unwrap();
        assert_eq!(instance.height_lower_bound(), expected);

        let layout = bl_pack(&instance.items, instance.strip).unwrap();
        assert!(layout.height() >= instance.height_lower_bound());
    }

    #[test]
    fn rotated_item_wider_than_strip_widens_the_bounding_region() {
        let strip = Strip::new(20).unwrap();
        let items = vec![Item::new(1, 10, 10), Item::new(2, 5, 30).rotated()];

        let layout = bl_pack(&items, strip).unwrap();
        assert!(assertions::layout_is_collision_free(&layout));
        assert_eq!(layout.placed_items()[1].rect(), rect(0, 10, 30, 15));
        assert_eq!(layout.width(), 30);
        let fitness = layout.fitness();
        assert!(approx_eq!(f32, fitness, 250.0 / (15.0 * 30.0), ulps = 2));
    }

    #[test]
    fn rotate_is_an_involution() {
        let mut rng = SmallRng::seed_from_u64(42);
        for item in random_items(20, 50, &mut rng) {
            let once = item.rotated();
            assert_eq!(once.area(), item.area());
            assert_eq!((once.width(), once.height()), (item.height(), item.width()));
            assert_ne!(once.is_rotated(), item.is_rotated());

            let twice = once.rotated();
            assert_eq!(twice, item);
        }
    }
}
