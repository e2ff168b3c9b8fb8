// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffdesk_domain::{LineItem, ValidationError};

use crate::LineItemEditor;
use crate::tests::helpers::slot;

#[test]
fn test_add_uses_slot_count_as_handle() {
    let mut editor: LineItemEditor = LineItemEditor::new();
    assert_eq!(editor.add_blank(), 0);
    assert_eq!(editor.add("Mouse", "2"), 1);
    assert_eq!(editor.add_blank(), 2);
    assert_eq!(
        editor.slots(),
        &[slot(0, "", "1"), slot(1, "Mouse", "2"), slot(2, "", "1")]
    );
}

#[test]
fn test_remove_does_not_renumber() {
    let mut editor: LineItemEditor = LineItemEditor::new();
    editor.add("A", "1");
    editor.add("B", "1");
    editor.add("C", "1");

    assert!(editor.remove(1));
    assert_eq!(editor.slots(), &[slot(0, "A", "1"), slot(2, "C", "1")]);
    assert!(!editor.remove(1));
}

#[test]
fn test_handles_can_repeat_after_removal() {
    let mut editor: LineItemEditor = LineItemEditor::new();
    editor.add("A", "1");
    editor.add("B", "1");
    assert!(editor.remove(0));

    // One slot left, so the next handle is 1 again.
    assert_eq!(editor.add("C", "1"), 1);
    assert_eq!(editor.slots(), &[slot(1, "B", "1"), slot(1, "C", "1")]);

    // Removing handle 1 takes the first slot carrying it.
    assert!(editor.remove(1));
    assert_eq!(editor.slots(), &[slot(1, "C", "1")]);
}

#[test]
fn test_from_items_numbers_in_order() {
    let editor: LineItemEditor =
        LineItemEditor::from_items(&[LineItem::new("Laptop", 1), LineItem::new("Dock", 2)]);
    assert_eq!(
        editor.slots(),
        &[slot(0, "Laptop", "1"), slot(1, "Dock", "2")]
    );
}

#[test]
fn test_to_items_accepts_valid_slots() {
    let mut editor: LineItemEditor = LineItemEditor::new();
    editor.add("Monitor", "2");
    assert_eq!(editor.to_items(), Ok(vec![LineItem::new("Monitor", 2)]));
}

#[test]
fn test_to_items_rejects_empty_list() {
    let editor: LineItemEditor = LineItemEditor::new();
    assert_eq!(editor.to_items(), Err(ValidationError::NoLineItems));
}

#[test]
fn test_to_items_rejects_unnamed_item() {
    let mut editor: LineItemEditor = LineItemEditor::new();
    editor.add("Monitor", "1");
    editor.add("", "1");
    assert_eq!(
        editor.to_items(),
        Err(ValidationError::LineItemMissingName { position: 2 })
    );
}

#[test]
fn test_to_items_rejects_bad_quantities() {
    for quantity in ["0", "-1", "", "two", "1.5"] {
        let mut editor: LineItemEditor = LineItemEditor::new();
        editor.add("Monitor", quantity);
        assert_eq!(
            editor.to_items(),
            Err(ValidationError::LineItemQuantity {
                position: 1,
                value: quantity.to_string(),
            }),
            "quantity {quantity:?} should be rejected"
        );
    }
}

#[test]
fn test_sync_values_replaces_slots() {
    let mut editor: LineItemEditor = LineItemEditor::new();
    editor.add_blank();
    editor.sync_values(vec![slot(0, "Chair", "1"), slot(3, "Desk", "1")]);
    assert_eq!(editor.add_blank(), 2);
    assert_eq!(editor.slots().len(), 3);
}
