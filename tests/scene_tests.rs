use glam::Vec3;
use shape_spinner::rng::{MinDice, ScriptedDice, ThreadDice};
use shape_spinner::scene::{Scene, MAX_SHAPES, MIN_SHAPES};
use shape_spinner::{Light, Material, ShapeKind};

/// Rolls consumed by one cube after its coin flip: size, six face colors,
/// material, three offsets.
const CUBE_ROLLS: usize = 11;
/// Rolls consumed by one tetrahedron after its coin flip: size, four face
/// colors, material, three offsets.
const TETRA_ROLLS: usize = 9;

fn script_for_kinds(kinds: &[i32]) -> ScriptedDice {
    let mut rolls = vec![kinds.len() as i32];
    for &kind in kinds {
        rolls.push(kind);
        let filler = if kind == 0 { CUBE_ROLLS } else { TETRA_ROLLS };
        rolls.push(1); // size
        rolls.extend(std::iter::repeat(0).take(filler - 1));
    }
    rolls.extend([0, 0, 0]); // spin
    ScriptedDice::new(rolls)
}

#[test]
fn generated_count_stays_in_bounds() {
    let mut dice = ThreadDice::new();
    for _ in 0..50 {
        let scene = Scene::generate(&mut dice);
        let n = scene.shapes().len();
        assert!(
            (MIN_SHAPES as usize..=MAX_SHAPES as usize).contains(&n),
            "shape count {} outside [{}, {}]",
            n,
            MIN_SHAPES,
            MAX_SHAPES
        );
    }
}

#[test]
fn coin_flip_decides_shape_kind_in_order() {
    let mut dice = script_for_kinds(&[0, 1, 0, 1, 0]);
    let scene = Scene::generate(&mut dice);

    let kinds: Vec<_> = scene.kinds().collect();
    assert_eq!(
        kinds,
        vec![
            ShapeKind::Cube,
            ShapeKind::Tetrahedron,
            ShapeKind::Cube,
            ShapeKind::Tetrahedron,
            ShapeKind::Cube,
        ],
        "shapes must appear in creation order with coin 0 = cube"
    );
}

#[test]
fn minimum_dice_yields_five_minimum_cubes() {
    let scene = Scene::generate(&mut MinDice);

    assert_eq!(scene.shapes().len(), MIN_SHAPES as usize);
    for shape in scene.shapes() {
        assert_eq!(shape.kind, ShapeKind::Cube, "coin 0 always lands on cube");
        assert_eq!(shape.size, 0.1, "minimum size roll is 1/10");
        assert_eq!(shape.material, Material::VertexColored);
        assert_eq!(
            shape.offset,
            Vec3::new(-10.0, -1.0, -10.0),
            "offsets pinned at the translation minimums"
        );
    }
}

#[test]
fn fresh_scene_has_default_ambient_light() {
    let scene = Scene::generate(&mut MinDice);
    assert_eq!(scene.light(), Some(&Light::default_ambient()));
}

#[test]
fn every_face_group_is_uniformly_colored() {
    let mut dice = ThreadDice::new();
    let scene = Scene::generate(&mut dice);

    for shape in scene.shapes() {
        let per_face = shape.kind.verts_per_face();
        let groups: Vec<_> = shape.vertices().chunks(per_face).collect();
        assert_eq!(
            groups.len(),
            shape.kind.face_count(),
            "vertex count must split into exactly face_count groups"
        );
        for group in groups {
            let first = group[0].color;
            assert!(
                group.iter().all(|v| v.color == first),
                "all {} vertices of a face share one color",
                per_face
            );
        }
    }
}

#[test]
fn shapes_share_one_spin_vector() {
    let mut dice = ThreadDice::new();
    let mut scene = Scene::generate(&mut dice);
    let spin = scene.spin();

    scene.advance();
    for shape in scene.shapes() {
        assert_eq!(shape.rotation, spin, "every shape advances by the scene spin");
    }
}

#[test]
fn k_ticks_accumulate_k_times_the_spin() {
    let mut dice = ThreadDice::new();
    let mut scene = Scene::generate(&mut dice);
    let spin = scene.spin();

    let k = 7;
    for _ in 0..k {
        scene.advance();
    }

    for shape in scene.shapes() {
        let expected = spin * k as f32;
        assert!(
            (shape.rotation - expected).length() < 1e-5,
            "after {} ticks rotation should be {:?}, got {:?}",
            k,
            expected,
            shape.rotation
        );
    }
}

#[test]
fn shape_count_is_fixed_after_generation() {
    let mut dice = ThreadDice::new();
    let mut scene = Scene::generate(&mut dice);
    let n = scene.shapes().len();

    for _ in 0..100 {
        scene.advance();
    }
    assert_eq!(scene.shapes().len(), n, "ticking never adds or removes shapes");
}
