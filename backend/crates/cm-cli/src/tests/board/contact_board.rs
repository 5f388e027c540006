use crate::tests::board::fake_api::{FakeApi, contact};
use crate::{BoardEvent, ContactBoard, ContactField, ContactForm, FormMode};

use std::sync::atomic::Ordering;

fn bob_board() -> ContactBoard<FakeApi> {
    ContactBoard::new(FakeApi::with_contacts(vec![contact(
        "id-1", "Bob", "b@y.com", "555",
    )]))
}

fn fill(board: &mut ContactBoard<FakeApi>, name: &str, email: &str, number: &str) {
    board.set_field(ContactField::Name, name.to_string());
    board.set_field(ContactField::Email, email.to_string());
    board.set_field(ContactField::Number, number.to_string());
}

// =========================================================================
// Reducer
// =========================================================================

#[test]
fn given_listing_when_edit_started_then_form_copied_and_mode_editing() {
    let mut board = ContactBoard::new(FakeApi::default());

    board.apply(BoardEvent::EditStarted(contact("x", "A", "a@x.com", "1")));

    assert_eq!(board.mode(), &FormMode::Editing("x".to_string()));
    assert_eq!(board.form().name, "A");
    assert_eq!(board.form().email, "a@x.com");
    assert_eq!(board.form().number, "1");
}

#[test]
fn given_editing_when_cancelled_then_form_cleared_and_listing() {
    let mut board = ContactBoard::new(FakeApi::default());
    board.apply(BoardEvent::EditStarted(contact("x", "A", "a@x.com", "1")));

    board.apply(BoardEvent::Cancelled);

    assert_eq!(board.mode(), &FormMode::Listing);
    assert_eq!(board.form(), &ContactForm::default());
}

#[test]
fn given_editing_when_other_row_deleted_then_mode_kept() {
    let mut board = ContactBoard::new(FakeApi::default());
    board.apply(BoardEvent::EditStarted(contact("x", "A", "", "")));

    board.apply(BoardEvent::Deleted("y".to_string()));

    assert_eq!(board.mode(), &FormMode::Editing("x".to_string()));
    assert_eq!(board.form().name, "A");
}

#[test]
fn given_error_when_failed_then_only_last_error_changes() {
    let mut board = ContactBoard::new(FakeApi::default());
    board.apply(BoardEvent::Loaded(vec![contact("x", "A", "", "")]));
    board.apply(BoardEvent::FieldChanged(ContactField::Name, "typed".into()));

    board.apply(BoardEvent::Failed("boom".into()));

    assert_eq!(board.last_error(), Some("boom"));
    assert_eq!(board.users().len(), 1);
    assert_eq!(board.form().name, "typed");
    assert_eq!(board.mode(), &FormMode::Listing);
}

// =========================================================================
// Load
// =========================================================================

#[tokio::test]
async fn given_server_contacts_when_load_then_users_replaced() {
    let mut board = bob_board();

    board.load().await;

    assert_eq!(board.users(), &[contact("id-1", "Bob", "b@y.com", "555")]);
    assert_eq!(board.last_error(), None);
}

#[tokio::test]
async fn given_failing_server_when_load_then_error_recorded_and_users_kept() {
    let mut board = bob_board();
    board.load().await;
    board.api().set_failing(true);

    board.load().await;

    assert_eq!(board.users().len(), 1);
    assert!(board.last_error().unwrap().contains("SERVICE_UNAVAILABLE"));
}

// =========================================================================
// Submit
// =========================================================================

#[tokio::test]
async fn given_listing_when_submit_then_creates_clears_form_and_refetches() {
    let mut board = bob_board();
    board.load().await;
    fill(&mut board, "Ann", "a@x.com", "1");

    board.submit().await;

    assert_eq!(board.users().len(), 2);
    assert_eq!(board.users()[1].name, "Ann");
    assert_eq!(board.form(), &ContactForm::default());
    assert_eq!(board.mode(), &FormMode::Listing);
    assert_eq!(board.api().list_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_empty_form_when_submit_then_blank_contact_created() {
    let mut board = ContactBoard::new(FakeApi::default());

    board.submit().await;

    assert_eq!(board.users().len(), 1);
    assert_eq!(board.users()[0].name, "");
}

#[tokio::test]
async fn given_editing_when_submit_then_updates_and_returns_to_listing() {
    let mut board = bob_board();
    board.load().await;
    assert!(board.begin_edit("id-1"));
    board.set_field(ContactField::Name, "Bobby".to_string());

    board.submit().await;

    assert_eq!(board.users(), &[contact("id-1", "Bobby", "b@y.com", "555")]);
    assert_eq!(board.mode(), &FormMode::Listing);
    assert_eq!(board.form(), &ContactForm::default());
}

#[tokio::test]
async fn given_failing_server_when_submit_then_state_unchanged() {
    let mut board = bob_board();
    board.load().await;
    assert!(board.begin_edit("id-1"));
    board.set_field(ContactField::Number, "999".to_string());
    board.api().set_failing(true);

    board.submit().await;

    assert_eq!(board.mode(), &FormMode::Editing("id-1".to_string()));
    assert_eq!(board.form().number, "999");
    assert_eq!(board.users()[0].number, "555");
    assert!(board.last_error().is_some());
}

#[tokio::test]
async fn given_previous_error_when_submit_succeeds_then_error_cleared() {
    let mut board = bob_board();
    board.apply(BoardEvent::Failed("earlier".into()));

    board.submit().await;

    assert_eq!(board.last_error(), None);
}

// =========================================================================
// Edit & Delete
// =========================================================================

#[tokio::test]
async fn given_unknown_id_when_begin_edit_then_false_and_listing() {
    let mut board = bob_board();
    board.load().await;

    assert!(!board.begin_edit("nope"));
    assert_eq!(board.mode(), &FormMode::Listing);
}

#[tokio::test]
async fn given_row_when_delete_then_removed_after_refetch_and_form_untouched() {
    let mut board = bob_board();
    board.load().await;
    board.set_field(ContactField::Name, "draft".to_string());

    board.delete("id-1").await;

    assert!(board.users().is_empty());
    assert_eq!(board.form().name, "draft");
    assert_eq!(board.mode(), &FormMode::Listing);
}

#[tokio::test]
async fn given_editing_row_when_that_row_deleted_then_back_to_listing() {
    let mut board = bob_board();
    board.load().await;
    assert!(board.begin_edit("id-1"));

    board.delete("id-1").await;

    assert_eq!(board.mode(), &FormMode::Listing);
    assert_eq!(board.form(), &ContactForm::default());
}

#[tokio::test]
async fn given_failing_server_when_delete_then_row_kept() {
    let mut board = bob_board();
    board.load().await;
    board.api().set_failing(true);

    board.delete("id-1").await;

    assert_eq!(board.users().len(), 1);
    assert_eq!(board.api().stored().len(), 1);
    assert!(board.last_error().is_some());
}

#[tokio::test]
async fn given_rows_when_row_id_then_one_based_lookup() {
    let mut board = bob_board();
    board.load().await;

    assert_eq!(board.row_id(1), Some("id-1"));
    assert_eq!(board.row_id(0), None);
    assert_eq!(board.row_id(2), None);
}
