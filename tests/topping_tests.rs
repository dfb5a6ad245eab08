use sundae::config::SPRINKLE_COUNT;
use sundae::panel::{apply, Options, PanelAction};
use sundae::scene::{ObjectKind, Scene};
use sundae::shapes::IceCream;
use sundae::toppings::{
    ToppingManager, SPRINKLE_MAX_HEIGHT, SPRINKLE_MAX_RADIUS, SPRINKLE_MIN_HEIGHT,
    SPRINKLE_MIN_RADIUS, SPRINKLE_PALETTE,
};

fn model() -> (IceCream, ToppingManager) {
    (IceCream::new(Options::default().cream_color), ToppingManager::from_seed(42))
}

fn assert_static_shapes(scene: &Scene) {
    assert_eq!(scene.count(ObjectKind::Cone), 1);
    assert_eq!(scene.count(ObjectKind::Scoop), 1);
}

// ============================================================================
// Cherry
// ============================================================================

#[test]
fn test_repeated_cherry_leaves_one() {
    let (mut model, mut toppings) = model();
    let mut last = None;
    for _ in 0..5 {
        last = Some(toppings.add_cherry(&mut model.scene));
    }
    assert_eq!(model.scene.count(ObjectKind::Cherry), 1);
    assert!(model.scene.contains(last.unwrap()));
    assert_eq!(model.scene.len(), 3);
}

#[test]
fn test_new_cherry_replaces_old_handle() {
    let (mut model, mut toppings) = model();
    let first = toppings.add_cherry(&mut model.scene);
    let second = toppings.add_cherry(&mut model.scene);
    assert_ne!(first, second);
    assert!(!model.scene.contains(first));
    assert_eq!(toppings.cherry(), Some(second));
}

// ============================================================================
// Sprinkles
// ============================================================================

#[test]
fn test_repeated_sprinkles_leave_one_batch() {
    let (mut model, mut toppings) = model();
    for _ in 0..4 {
        toppings.add_sprinkles(&mut model.scene);
    }
    assert_eq!(model.scene.count(ObjectKind::Sprinkle), SPRINKLE_COUNT);
    assert_eq!(model.scene.len(), 2 + SPRINKLE_COUNT);
}

#[test]
fn test_latest_batch_is_in_scene_and_in_band() {
    let (mut model, mut toppings) = model();
    let old: Vec<_> = toppings.add_sprinkles(&mut model.scene).to_vec();
    let new: Vec<_> = toppings.add_sprinkles(&mut model.scene).to_vec();

    assert_eq!(new.len(), 100);
    assert!(old.iter().all(|id| !model.scene.contains(*id)));
    for id in new {
        let s = model.scene.get(id).expect("sprinkle in scene");
        let r = (s.position.x.powi(2) + s.position.z.powi(2)).sqrt();
        assert!(r >= SPRINKLE_MIN_RADIUS - 1e-5 && r <= SPRINKLE_MAX_RADIUS + 1e-5);
        assert!(s.position.y >= SPRINKLE_MIN_HEIGHT && s.position.y <= SPRINKLE_MAX_HEIGHT);
        assert!(SPRINKLE_PALETTE.contains(&s.color));
    }
}

#[test]
fn test_batches_are_freshly_randomized() {
    let (mut model, mut toppings) = model();
    let first: Vec<_> = toppings.add_sprinkles(&mut model.scene).to_vec();
    let first_pos: Vec<_> = first.iter().map(|id| model.scene.get(*id).unwrap().position).collect();
    // removed objects are gone, so compare against the positions captured above
    let second: Vec<_> = toppings.add_sprinkles(&mut model.scene).to_vec();
    let second_pos: Vec<_> = second.iter().map(|id| model.scene.get(*id).unwrap().position).collect();
    assert_ne!(first_pos, second_pos);
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_remove_toppings_leaves_static_shapes() {
    let (mut model, mut toppings) = model();
    toppings.add_cherry(&mut model.scene);
    toppings.add_sprinkles(&mut model.scene);
    toppings.remove_toppings(&mut model.scene);

    assert_eq!(model.scene.count(ObjectKind::Cherry), 0);
    assert_eq!(model.scene.count(ObjectKind::Sprinkle), 0);
    assert_static_shapes(&model.scene);
    assert_eq!(model.scene.len(), 2);
}

#[test]
fn test_remove_without_toppings_is_harmless() {
    let (mut model, mut toppings) = model();
    toppings.remove_toppings(&mut model.scene);
    toppings.remove_toppings(&mut model.scene);
    assert_eq!(model.scene.len(), 2);
}

#[test]
fn test_remove_twice_then_add_again() {
    let (mut model, mut toppings) = model();
    toppings.add_sprinkles(&mut model.scene);
    toppings.remove_toppings(&mut model.scene);
    toppings.remove_toppings(&mut model.scene);
    toppings.add_sprinkles(&mut model.scene);
    assert_eq!(model.scene.count(ObjectKind::Sprinkle), SPRINKLE_COUNT);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_cherry_sprinkles_remove_cherry_scenario() {
    let (mut model, mut toppings) = model();
    toppings.add_cherry(&mut model.scene);
    toppings.add_sprinkles(&mut model.scene);
    toppings.remove_toppings(&mut model.scene);
    toppings.add_cherry(&mut model.scene);

    assert_eq!(model.scene.count(ObjectKind::Cherry), 1);
    assert_eq!(model.scene.count(ObjectKind::Sprinkle), 0);
    assert_static_shapes(&model.scene);
    assert_eq!(model.scene.len(), 3);
}

#[test]
fn test_panel_actions_drive_the_same_scenario() {
    let (mut model, mut toppings) = model();
    for action in [
        PanelAction::AddCherry,
        PanelAction::AddSprinkles,
        PanelAction::RemoveToppings,
        PanelAction::AddCherry,
    ] {
        apply(action, &mut model.scene, &mut toppings, model.scoop);
    }
    assert_eq!(model.scene.len(), 3);
    assert_eq!(model.scene.count(ObjectKind::Cherry), 1);
}
