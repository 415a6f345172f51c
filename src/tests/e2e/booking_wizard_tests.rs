use crate::modules::bookings::adapters::outbound::booking_authority::BookingAuthority;
use crate::modules::bookings::adapters::outbound::booking_authority_in_memory::InMemoryBookingAuthority;
use crate::modules::bookings::adapters::outbound::session_store::SessionStore;
use crate::modules::bookings::adapters::outbound::session_store_in_memory::InMemorySessionStore;
use crate::modules::bookings::core::booking::BookingOutcome;
use crate::modules::bookings::core::wizard::StageKind;
use crate::modules::bookings::use_cases::run_booking_wizard::command::WizardCommand;
use crate::modules::bookings::use_cases::run_booking_wizard::handler::BookingWizardHandler;
use crate::shared::core::primitives::{ParticipantId, SessionId};
use crate::shared::infrastructure::identity::in_memory::InMemoryParticipantDirectory;
use crate::tests::fixtures::bookings::{at, booking_date, request, short_grid};
use chrono::NaiveDate;
use std::sync::Arc;

type Wizard =
    BookingWizardHandler<InMemorySessionStore, InMemoryBookingAuthority, InMemoryParticipantDirectory>;

async fn wizard(authority: Arc<InMemoryBookingAuthority>) -> (Wizard, Arc<InMemorySessionStore>) {
    let directory = InMemoryParticipantDirectory::new();
    directory
        .register("tg-1001", ParticipantId::new("participant-0001"))
        .await;
    directory
        .register("tg-1002", ParticipantId::new("participant-0002"))
        .await;
    let sessions = Arc::new(InMemorySessionStore::new());
    let grid = short_grid();
    let wizard = BookingWizardHandler::new(
        sessions.clone(),
        authority,
        Arc::new(directory),
        Arc::new(move |_: NaiveDate| grid.clone()),
        None,
    );
    (wizard, sessions)
}

async fn pick_range(
    wizard: &Wizard,
    external_identity: &str,
    start: (u32, u32),
    end: (u32, u32),
) -> SessionId {
    let session_id = wizard.start(external_identity).await.unwrap().session_id;
    let commands = [
        WizardCommand::SelectDate {
            date: booking_date(),
        },
        WizardCommand::ToggleSlot {
            slot: at(start.0, start.1),
        },
        WizardCommand::ToggleSlot {
            slot: at(end.0, end.1),
        },
    ];
    for command in commands {
        wizard.handle(session_id, command).await.unwrap();
    }
    session_id
}

#[tokio::test]
async fn a_taken_slot_sends_the_participant_back_to_date_selection() {
    let authority = Arc::new(InMemoryBookingAuthority::new(2.0));
    let (wizard, sessions) = wizard(authority.clone()).await;
    let session_id = pick_range(&wizard, "tg-1001", (7, 0), (8, 0)).await;

    authority
        .create_booking(&request("participant-0002", at(7, 30), at(8, 30)))
        .await
        .unwrap();

    let response = wizard
        .handle(session_id, WizardCommand::Confirm)
        .await
        .unwrap();

    assert_eq!(
        response.outcome,
        Some(BookingOutcome::Rejected {
            error: "slot taken".into()
        })
    );
    assert_eq!(response.notice.as_deref(), Some("Error occurred: slot taken"));
    assert_eq!(response.stage, StageKind::ChoosingDate);
    let stored = sessions.load(session_id).await.unwrap();
    assert!(stored.selection().is_none());
}

#[tokio::test]
async fn a_rejected_participant_can_start_over_from_a_new_date() {
    let authority = Arc::new(InMemoryBookingAuthority::new(2.0));
    authority.refuse_next("slot taken").await;
    let (wizard, _) = wizard(authority.clone()).await;
    let session_id = pick_range(&wizard, "tg-1001", (7, 0), (8, 0)).await;
    wizard
        .handle(session_id, WizardCommand::Confirm)
        .await
        .unwrap();

    let next_day = booking_date().succ_opt().unwrap();
    let response = wizard
        .handle(session_id, WizardCommand::SelectDate { date: next_day })
        .await
        .unwrap();

    let view = response.time_selection.unwrap();
    assert_eq!(view.date, next_day);
    assert!(view.grid.selected.is_empty());
}

#[tokio::test]
async fn the_budget_left_after_a_booking_narrows_the_next_selection() {
    let authority = Arc::new(InMemoryBookingAuthority::new(1.5));
    let (wizard, _) = wizard(authority.clone()).await;
    let first = pick_range(&wizard, "tg-1001", (7, 0), (8, 0)).await;
    wizard.handle(first, WizardCommand::Confirm).await.unwrap();

    let second = wizard.start("tg-1001").await.unwrap().session_id;
    wizard
        .handle(
            second,
            WizardCommand::SelectDate {
                date: booking_date(),
            },
        )
        .await
        .unwrap();
    let response = wizard
        .handle(second, WizardCommand::ToggleSlot { slot: at(8, 0) })
        .await
        .unwrap();

    let view = response.time_selection.unwrap();
    assert_eq!(view.budget.whole_hours, 0);
    assert_eq!(view.budget.leftover_minutes, 30);
    assert_eq!(view.grid.eligible, vec![at(8, 30)]);
    assert_eq!(view.daily_bookings.len(), 1);
}

#[tokio::test]
async fn concurrent_sessions_race_for_the_same_range_and_one_wins() {
    let authority = Arc::new(InMemoryBookingAuthority::new(2.0));
    let (wizard, _) = wizard(authority.clone()).await;
    let first = pick_range(&wizard, "tg-1001", (7, 0), (8, 0)).await;
    let second = pick_range(&wizard, "tg-1002", (7, 30), (8, 30)).await;
    authority.set_delay_ms(10);

    let (a, b) = tokio::join!(
        wizard.handle(first, WizardCommand::Confirm),
        wizard.handle(second, WizardCommand::Confirm)
    );
    let stages = [a.unwrap().stage, b.unwrap().stage];

    assert!(stages.contains(&StageKind::Done));
    assert!(stages.contains(&StageKind::ChoosingDate));
    assert_eq!(authority.create_calls(), 2);
}

#[tokio::test]
async fn going_back_and_quitting_never_touch_the_authority() {
    let authority = Arc::new(InMemoryBookingAuthority::new(2.0));
    let (wizard, _) = wizard(authority.clone()).await;
    let session_id = pick_range(&wizard, "tg-1001", (7, 0), (8, 0)).await;

    let back = wizard.handle(session_id, WizardCommand::Back).await.unwrap();
    assert_eq!(back.stage, StageKind::ChoosingDate);
    let quit = wizard.handle(session_id, WizardCommand::Quit).await.unwrap();
    assert_eq!(quit.stage, StageKind::Terminated);
    assert!(wizard.handle(session_id, WizardCommand::Quit).await.is_err());

    assert_eq!(authority.create_calls(), 0);
    assert!(authority.daily_bookings(booking_date()).await.unwrap().is_empty());
}
