use klima_rs::api::{CommitAction, FieldKey, Severity};
use klima_rs::io::export_dataset;
use klima_rs::ClimateSession;

#[test]
fn session_without_import_serves_the_sample_dataset() {
    let session = ClimateSession::with_sample_dataset();
    let names: Vec<&str> = session.store().names().collect();
    assert_eq!(names, vec!["Musterdatensatz"]);
}

#[test]
fn full_pass_load_edit_commit_render() {
    let mut session = ClimateSession::with_sample_dataset();
    session.select_load("Musterdatensatz").expect("load sample");
    session
        .edit_field(FieldKey::Precipitation(0), "120")
        .expect("edit January");

    let message = session.commit(CommitAction::Save);
    assert_eq!(message.severity, Severity::Success);
    assert_eq!(session.store().entries()[0].precipitation[0], 120.0);

    let layout = session.render().expect("layout after commit");
    // January now crosses the kink and splits into two bars.
    let january: Vec<_> = layout.bars.iter().filter(|bar| bar.month == 0).collect();
    assert_eq!(january.len(), 2);
}

#[test]
fn render_is_idempotent_for_unchanged_inputs() {
    let mut session = ClimateSession::with_sample_dataset();
    session.select_load("Musterdatensatz").expect("load sample");

    assert_eq!(session.render(), session.render());
}

#[test]
fn render_without_selection_yields_nothing() {
    let session = ClimateSession::with_sample_dataset();
    assert!(session.render().is_none());
}

#[test]
fn render_reflects_uncommitted_buffer_edits() {
    let mut session = ClimateSession::with_sample_dataset();
    session.select_load("Musterdatensatz").expect("load sample");
    session
        .edit_field(FieldKey::Station, "Edited Station")
        .expect("station edit");

    let layout = session.render().expect("layout");
    assert!(layout.annotations[0].text.starts_with("Edited Station/"));
    // The store still holds the committed record.
    assert_eq!(session.store().entries()[0].station, "New York City");
}

#[test]
fn export_round_trips_through_a_new_session() {
    let mut session = ClimateSession::with_sample_dataset();
    session.select_load("Musterdatensatz").expect("load sample");
    session.edit_field(FieldKey::Name, "Kopie").expect("rename");
    session.commit(CommitAction::SaveAs);
    assert_eq!(session.store().len(), 2);

    let bytes = session.export().expect("export");
    let reopened = ClimateSession::from_import(&bytes).expect("import");
    let names: Vec<&str> = reopened.store().names().collect();
    assert_eq!(names, vec!["Musterdatensatz", "Kopie"]);
}

#[test]
fn failed_import_keeps_the_prior_session_state() {
    let mut session = ClimateSession::with_sample_dataset();
    session.select_load("Musterdatensatz").expect("load sample");

    let err = session.replace_dataset(b"not json").expect_err("bad payload");
    assert!(err.to_string().contains("import failed"));
    assert_eq!(session.store().len(), 1);
    assert!(session.editor().has_selection());
}

#[test]
fn successful_import_replaces_the_store_and_clears_selection() {
    let mut session = ClimateSession::with_sample_dataset();
    session.select_load("Musterdatensatz").expect("load sample");

    let other = {
        let mut entries = klima_rs::io::sample_dataset();
        entries[0].name = "Anderswo".to_owned();
        export_dataset(&entries).expect("export fixture")
    };

    session.replace_dataset(&other).expect("import replacement");
    let names: Vec<&str> = session.store().names().collect();
    assert_eq!(names, vec!["Anderswo"]);
    assert!(!session.editor().has_selection());
}

#[test]
fn delete_then_render_returns_to_empty_state() {
    let mut session = ClimateSession::with_sample_dataset();
    session.select_load("Musterdatensatz").expect("load sample");

    let message = session.commit(CommitAction::Delete);
    assert_eq!(message.severity, Severity::Success);
    assert!(session.store().is_empty());
    assert!(session.render().is_none());

    let status = session.take_status().expect("delete status");
    assert_eq!(status.severity, Severity::Success);
    assert!(session.take_status().is_none());
}
