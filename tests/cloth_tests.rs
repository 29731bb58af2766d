use tether::{BoxBounds, Cloth, ClothConfig, NoOpStepObserver, Vec3, Verlet};

fn hanging_cloth(config: &ClothConfig<f32>) -> (Verlet<f32>, Cloth) {
    let mut v = Verlet::new(256);
    let cloth = Cloth::build(
        &mut v,
        Vec3::new(0.0, 5.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        config,
    )
    .unwrap();
    (v, cloth)
}

#[test]
fn pinned_top_row_drapes_under_gravity() {
    let (mut v, cloth) = hanging_cloth(&ClothConfig::new(5, 5, 1.0));

    let top_initial: Vec<_> =
        (0..cloth.cols()).map(|c| v.point(cloth.index(c, 0)).unwrap()).collect();
    let bottom_row = cloth.rows() - 1;
    let bottom_initial: Vec<_> =
        (0..cloth.cols()).map(|c| v.point(cloth.index(c, bottom_row)).unwrap()).collect();

    cloth.pin_top_row(&mut v).unwrap();

    for _ in 0..120 {
        v.apply_force(Vec3::new(0.0, -9.81, 0.0));
        v.step(1.0 / 60.0, None, &mut NoOpStepObserver).unwrap();
    }

    for col in 0..cloth.cols() {
        let pos = v.point(cloth.index(col, 0)).unwrap();
        assert_eq!(pos, top_initial[col], "top row particle at col {} should remain pinned", col);
    }
    for col in 0..cloth.cols() {
        let pos = v.point(cloth.index(col, bottom_row)).unwrap();
        assert!(
            pos.y < bottom_initial[col].y,
            "bottom row particle at col {} should have dropped below y {}, but y is {}",
            col, bottom_initial[col].y, pos.y,
        );
    }
}

#[test]
fn cloth_rests_on_floor_box() {
    let (mut v, cloth) = hanging_cloth(&ClothConfig::new(6, 6, 0.5));
    let floor = BoxBounds::new(Vec3::new(-20.0, 0.0, -20.0), Vec3::splat(20.0));

    for _ in 0..600 {
        v.apply_force(Vec3::new(0.0, -9.81, 0.0));
        v.step(1.0 / 60.0, Some(&floor), &mut NoOpStepObserver).unwrap();
    }

    assert!(v.positions().iter().all(|p| floor.contains(*p)));
    let corner = v.point(cloth.index(0, 0)).unwrap();
    assert!(corner.y < 0.1, "unpinned cloth should settle on the floor, y = {}", corner.y);
}

#[test]
fn tearing_the_middle_column_splits_the_cloth() {
    let config = ClothConfig::new(5, 4, 1.0).with_shear(false);
    let (mut v, cloth) = hanging_cloth(&config);
    cloth.pin_top_row(&mut v).unwrap();

    let before = v.link_count();
    let mut removed = 0;
    for row in 1..cloth.rows() {
        removed += cloth.tear_at(&mut v, 2, row);
    }
    assert_eq!(v.link_count(), before - removed);
    for row in 1..cloth.rows() {
        assert!(v.incident_links(cloth.index(2, row)).is_empty());
    }
    assert_eq!(cloth.tear_at(&mut v, 9, 9), 0, "out-of-grid tear is a no-op");
}

#[test]
fn fails_cleanly_when_out_of_room() {
    let mut v: Verlet<f32> = Verlet::new(10);
    let result = Cloth::build(
        &mut v,
        Vec3::zero(),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        &ClothConfig::new(4, 4, 1.0),
    );
    assert!(result.is_err());
    assert_eq!(v.size(), 0);
    assert_eq!(v.link_count(), 0);
}
