use std::collections::BTreeSet;

use tether::{Cloth, ClothConfig, Link, Vec3, Verlet};

/// Every point's incident set equals the links in the global set that contain it.
fn assert_index_consistent(v: &Verlet<f32>) {
    for id in 0..v.size() {
        let expected: BTreeSet<Link> =
            v.links().iter().map(|c| c.link).filter(|l| l.contains(id)).collect();
        let actual: BTreeSet<Link> = v.incident_links(id).into_iter().collect();
        assert_eq!(actual, expected, "incidence index out of sync at point {}", id);
    }
}

fn grid() -> (Verlet<f32>, Cloth) {
    let mut v = Verlet::new(128);
    let cloth = Cloth::build(
        &mut v,
        Vec3::zero(),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        &ClothConfig::new(5, 5, 1.0).with_bend(true),
    )
    .unwrap();
    (v, cloth)
}

#[test]
fn index_consistent_after_build() {
    let (v, _) = grid();
    assert_index_consistent(&v);
}

#[test]
fn remove_link_either_order() {
    let (mut v, cloth) = grid();
    let (a, b) = (cloth.index(0, 0), cloth.index(1, 0));
    assert!(v.remove_link(b, a));
    assert!(!v.has_link(a, b));
    assert!(!v.incident_links(a).contains(&Link::new(a, b)));
    assert!(!v.incident_links(b).contains(&Link::new(a, b)));
    assert_index_consistent(&v);
}

#[test]
fn removing_twice_changes_nothing() {
    let (mut v, cloth) = grid();
    let (a, b) = (cloth.index(2, 2), cloth.index(2, 3));
    assert!(v.remove_link(a, b));
    let links_after: Vec<_> = v.links().to_vec();
    let index_after: Vec<_> = (0..v.size()).map(|id| v.incident_links(id)).collect();

    assert!(!v.remove_link(a, b));
    assert!(!v.remove_link(0, 24)); // never existed
    assert!(!v.remove(Link::new(1000, 1001)));

    assert_eq!(v.links(), links_after.as_slice());
    let index_now: Vec<_> = (0..v.size()).map(|id| v.incident_links(id)).collect();
    assert_eq!(index_now, index_after);
}

#[test]
fn remove_links_at_severs_point() {
    let (mut v, cloth) = grid();
    let centre = cloth.index(2, 2);
    let degree = v.incident_links(centre).len();
    // 4 structural + 4 shear + 4 bend
    assert_eq!(degree, 12);
    let before = v.link_count();

    assert_eq!(v.remove_links_at(centre), degree);
    assert_eq!(v.link_count(), before - degree);
    assert!(v.incident_links(centre).is_empty());
    assert!(v.links().iter().all(|c| !c.link.contains(centre)));
    assert_index_consistent(&v);

    assert_eq!(v.remove_links_at(centre), 0);
    assert_eq!(v.remove_links_at(9999), 0);
    assert_eq!(v.link_count(), before - degree);
}

#[test]
fn interleaved_creation_and_removal_stay_consistent() {
    let (mut v, cloth) = grid();
    for (col, row) in [(0, 0), (4, 4), (1, 3), (3, 1)] {
        v.remove_links_at(cloth.index(col, row));
        assert_index_consistent(&v);
    }
    // Relink a torn corner and tear a single link elsewhere.
    v.create_link(cloth.index(0, 0), cloth.index(1, 0)).unwrap();
    v.create_link(cloth.index(0, 0), cloth.index(1, 0)).unwrap();
    v.remove_link(cloth.index(2, 2), cloth.index(2, 1));
    assert_index_consistent(&v);
    assert_eq!(v.incident_links(cloth.index(0, 0)), vec![Link::new(0, 1)]);
}

#[test]
fn torn_links_stop_pulling() {
    let mut v: Verlet<f32> = Verlet::new(4);
    let a = v.create_point(Vec3::zero()).unwrap();
    let b = v.create_point(Vec3::new(1.0, 0.0, 0.0)).unwrap();
    v.create_link(a, b).unwrap();
    v.remove_link(a, b);
    v.set_pos(b, Vec3::new(5.0, 0.0, 0.0)).unwrap();
    v.link_constraint();
    assert_eq!(v.point(a).unwrap(), Vec3::zero());
    assert_eq!(v.point(b).unwrap(), Vec3::new(5.0, 0.0, 0.0));
}
