//! List behaviour integration tests

use rstest::{fixture, rstest};
use shoplist_core::{
    parse_command, Command, EntryForm, ItemId, ListEvent, ListState, Summary, ValidationError,
};

#[fixture]
fn milk_list() -> ListState {
    let mut list = ListState::new();
    list.add_item("Milk", "2", "liter").unwrap();
    list
}

// === Add ===

#[test]
fn test_shopping_scenario() {
    let mut list = ListState::new();

    let milk = list.add_item("Milk", "2", "liter").unwrap();
    assert_eq!(milk.id, ItemId(1));
    assert_eq!(milk.name, "Milk");
    assert_eq!(milk.quantity, 2.0);
    assert_eq!(milk.unit, "liter");
    assert!(!milk.purchased);

    assert_eq!(
        list.add_item("milk", "1", "liter"),
        Err(ValidationError::DuplicateItem)
    );
    assert_eq!(list.items(), &[milk.clone()]);

    assert_eq!(
        list.add_item("Eggs", "-3", "dozen"),
        Err(ValidationError::InvalidQuantity)
    );
    assert_eq!(
        list.add_item("", "1", "kg"),
        Err(ValidationError::EmptyField)
    );
    assert_eq!(list.items(), &[milk]);
}

#[rstest]
#[case("Bread", "1", "loaf", 1.0)]
#[case("  Flour ", " 1.5 ", " kg ", 1.5)]
#[case("Water", "6", "bottle", 6.0)]
#[case("Yeast", ".25", "packet", 0.25)]
#[case("Rice", "1e1", "kg", 10.0)]
fn test_valid_entries_append_one_item(
    milk_list: ListState,
    #[case] name: &str,
    #[case] quantity: &str,
    #[case] unit: &str,
    #[case] expected: f64,
) {
    let mut list = milk_list;
    let item = list.add_item(name, quantity, unit).unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(item.id, ItemId(2));
    assert_eq!(item.name, name.trim());
    assert_eq!(item.unit, unit.trim());
    assert!((item.quantity - expected).abs() < f64::EPSILON);
    assert_eq!(list.items().last(), Some(&item));
}

#[rstest]
#[case("", "1", "kg", ValidationError::EmptyField)]
#[case("Rice", "   ", "kg", ValidationError::EmptyField)]
#[case("Rice", "1", "\t", ValidationError::EmptyField)]
#[case("Rice", "0", "kg", ValidationError::InvalidQuantity)]
#[case("Rice", "-2", "kg", ValidationError::InvalidQuantity)]
#[case("Rice", "two", "kg", ValidationError::InvalidQuantity)]
#[case("Rice", "1 kg", "kg", ValidationError::InvalidQuantity)]
#[case("Rice", "1", "kg  bag", ValidationError::WhitespaceFormat)]
#[case("MILK", "1", "liter", ValidationError::DuplicateItem)]
#[case(" milk ", "3", "carton", ValidationError::DuplicateItem)]
fn test_invalid_entries_are_stable(
    milk_list: ListState,
    #[case] name: &str,
    #[case] quantity: &str,
    #[case] unit: &str,
    #[case] expected: ValidationError,
) {
    let mut list = milk_list;
    let items_before = list.items().to_vec();
    let next_before = list.next_id();

    for _ in 0..3 {
        assert_eq!(list.add_item(name, quantity, unit), Err(expected));
        assert_eq!(list.items(), items_before.as_slice());
        assert_eq!(list.next_id(), next_before);
        assert_eq!(list.error(), Some(expected));
    }
}

#[test]
fn test_failed_submit_keeps_form_text() {
    let mut list = ListState::new();
    list.set_name("Eggs");
    list.set_quantity(" -3 ");
    list.set_unit("dozen");

    assert_eq!(list.submit_form(), Err(ValidationError::InvalidQuantity));
    assert_eq!(list.form(), &EntryForm::new("Eggs", " -3 ", "dozen"));
    assert_eq!(
        list.error_message().as_deref(),
        Some("quantity must be a positive number")
    );
}

#[test]
fn test_ids_increase_and_are_never_reused() {
    let mut list = ListState::new();
    for (i, name) in ["a", "b", "c"].iter().enumerate() {
        let item = list.add_item(name, "1", "pcs").unwrap();
        assert_eq!(item.id, ItemId(i as u64 + 1));
    }

    list.delete_item(ItemId(3));
    list.delete_item(ItemId(2));
    let item = list.add_item("d", "1", "pcs").unwrap();
    assert_eq!(item.id, ItemId(4));
    assert!(list.items().iter().all(|i| i.id < list.next_id()));
}

// === Delete / Toggle ===

#[rstest]
#[case(0)]
#[case(2)]
#[case(u64::MAX)]
fn test_delete_unknown_id_is_noop(milk_list: ListState, #[case] id: u64) {
    let mut list = milk_list;
    let _ = list.add_item("", "", "");
    let before = list.clone();

    assert_eq!(list.delete_item(ItemId(id)), None);
    assert_eq!(list, before);
    assert_eq!(list.error(), Some(ValidationError::EmptyField));
}

#[test]
fn test_toggles_keep_order() {
    let mut list = ListState::new();
    for name in ["Milk", "Bread", "Eggs", "Butter"] {
        list.add_item(name, "1", "pcs").unwrap();
    }
    let order: Vec<ItemId> = list.items().iter().map(|i| i.id).collect();

    for id in [2, 4, 2, 1, 3, 3] {
        list.toggle_purchased(ItemId(id));
    }

    let after: Vec<ItemId> = list.items().iter().map(|i| i.id).collect();
    assert_eq!(order, after);
    let purchased: Vec<bool> = list.items().iter().map(|i| i.purchased).collect();
    assert_eq!(purchased, vec![true, false, false, true]);
}

// === Summary ===

#[test]
fn test_summary_messages() {
    let mut list = ListState::new();
    assert_eq!(list.summary(), Summary::Empty);
    assert_eq!(list.summary().message(), None);

    list.add_item("Milk", "2", "liter").unwrap();
    list.toggle_purchased(ItemId(1));
    assert_eq!(
        list.summary().message().as_deref(),
        Some("all items purchased.")
    );

    list.add_item("Bread", "1", "loaf").unwrap();
    assert_eq!(
        list.summary().message().as_deref(),
        Some("1 items remaining.")
    );
}

// === Commands ===

#[test]
fn test_command_line_session() {
    let mut list = ListState::new();

    let mut run = |line: &str| parse_command(line).unwrap().execute(&mut list);

    assert!(matches!(run("add Milk | 2 | liter").as_slice(), [ListEvent::ItemAdded(_)]));
    assert!(matches!(
        run("add MILK | 1 | liter").as_slice(),
        [ListEvent::ValidationFailed(ValidationError::DuplicateItem)]
    ));
    assert_eq!(
        run("toggle 1"),
        vec![ListEvent::PurchasedToggled {
            id: ItemId(1),
            purchased: true
        }]
    );
    assert!(run("delete 7").is_empty());
    assert!(matches!(run("rm 1").as_slice(), [ListEvent::ItemDeleted(_)]));

    assert!(list.is_empty());
    assert_eq!(list.next_id(), ItemId(2));
}

#[test]
fn test_submit_form_command_uses_form_fields() {
    let mut list = ListState::new();
    list.set_name("Tea");
    list.set_quantity("20");
    list.set_unit("bags");

    let events = Command::SubmitForm.execute(&mut list);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].describe(), "Added Tea 20 bags");
    assert!(list.form().is_blank());
}
