//! Application state: the booking session view-model and UI-only state.

use crate::booking::SubmitError;
use crate::config::TuiConfig;
use crate::form::FormField;
use crate::keys::Action;
use crate::nav::Pane;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::SynthBruteTheme;
use chrono::{DateTime, Utc};
use skyseat_core::{
    Amount, Booking, BookingForm, BookingRequest, FlightInfo, FlightSnapshot, FlightStats, Seat,
    SeatCatalog, SeatId, SeatMap, SeatSelection, SelectionError,
};

/// Keep this many notifications around for the footer.
const MAX_NOTIFICATIONS: usize = 50;

// ============================================================================
// MODAL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Confirmation,
    Alert,
}

/// A blocking message that must be dismissed before anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub kind: ModalKind,
    pub title: String,
    pub message: String,
}

impl Modal {
    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            kind: ModalKind::Alert,
            title: "Booking".to_string(),
            message: message.into(),
        }
    }

    pub fn confirmation(booking: &Booking) -> Self {
        Self {
            kind: ModalKind::Confirmation,
            title: "Success".to_string(),
            message: format!("Booking #{} Confirmed!", booking.id),
        }
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// Everything the booking page shows and the user is in the middle of.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub flight: Option<FlightInfo>,
    pub stats: FlightStats,
    pub catalog: SeatCatalog,
    pub seat_map: SeatMap,
    pub selection: SeatSelection,
    pub form: BookingForm,
    /// Newest first.
    pub bookings: Vec<Booking>,
    /// Fare for the selected seat and current luggage weight.
    pub total: Option<Amount>,
    /// A booking request is in flight; the submit control is disabled.
    pub submitting: bool,
    pub modal: Option<Modal>,
    pub notifications: Vec<Notification>,
    pub last_refreshed: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_snapshot(&mut self, snapshot: FlightSnapshot) {
        self.flight = Some(snapshot.info);
        self.stats = snapshot.stats;
        self.catalog = snapshot.seats;
        self.seat_map = SeatMap::build(&self.catalog);
        if let Some(dropped) = self.selection.reconcile(&self.catalog) {
            tracing::info!(seat = %dropped, "Selected seat no longer available");
            self.notify(
                NotificationLevel::Warning,
                format!("Seat {} is no longer available", dropped),
            );
        }
        self.recompute_total();
        self.last_refreshed = Some(Utc::now());
        tracing::debug!(
            seats = self.catalog.len(),
            available = self.catalog.available_count(),
            "Seat catalog loaded"
        );
    }

    /// Replace the booking list; `bookings` arrive oldest first.
    pub fn apply_bookings(&mut self, mut bookings: Vec<Booking>) {
        bookings.reverse();
        self.bookings = bookings;
    }

    pub fn select_seat(&mut self, id: &SeatId) -> Result<(), SelectionError> {
        let seat = self
            .catalog
            .get(id)
            .ok_or(SelectionError::UnknownSeat(*id))?;
        self.selection.select(seat)?;
        self.recompute_total();
        tracing::info!(seat = %id, "Seat selected");
        Ok(())
    }

    pub fn selected_seat(&self) -> Option<&Seat> {
        self.selection.seat()
    }

    /// "12A (Economy)", or "-" with nothing selected.
    pub fn selected_seat_label(&self) -> String {
        self.selection
            .seat()
            .map(Seat::display_label)
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn base_price(&self) -> Option<Amount> {
        self.selection.seat().map(|seat| seat.price)
    }

    pub fn recompute_total(&mut self) {
        self.total = self.selection.compute_total(self.form.luggage_kg());
    }

    /// Apply an edit to the form and refresh the total.
    pub fn edit_form<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&mut BookingForm) -> bool,
    {
        let changed = edit(&mut self.form);
        if changed {
            self.recompute_total();
        }
        changed
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let excess = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..excess);
        }
    }

    /// Latest notification, unless it has gone stale by `now`.
    pub fn current_notification(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.notifications
            .last()
            .filter(|notification| notification.is_fresh(now))
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        self.modal = Some(Modal::alert(message));
    }

    pub fn dismiss_modal(&mut self) -> bool {
        self.modal.take().is_some()
    }

    /// Validate and mark a submission as in flight.
    pub fn begin_submission(&mut self) -> Result<BookingRequest, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let seat_no = self.selection.seat_id().ok_or(SubmitError::NoSeatSelected)?;
        self.submitting = true;
        Ok(self.form.to_request(seat_no))
    }

    pub fn finish_submission(&mut self) {
        self.submitting = false;
    }

    /// Show the confirmation and reset the form and selection.
    pub fn complete_booking(&mut self, booking: &Booking) {
        self.modal = Some(Modal::confirmation(booking));
        self.form.reset();
        self.selection.clear();
        self.recompute_total();
    }
}

// ============================================================================
// UI STATE
// ============================================================================

/// Cursor over the seat map, in (row index, seat index) terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatCursor {
    pub row: usize,
    pub seat: usize,
}

impl SeatCursor {
    pub fn clamp(&mut self, map: &SeatMap) {
        let rows = map.rows();
        if rows.is_empty() {
            *self = Self::default();
            return;
        }
        self.row = self.row.min(rows.len() - 1);
        let seats = rows[self.row].seat_count();
        self.seat = self.seat.min(seats.saturating_sub(1));
    }

    pub fn move_up(&mut self, map: &SeatMap) {
        self.row = self.row.saturating_sub(1);
        self.clamp(map);
    }

    pub fn move_down(&mut self, map: &SeatMap) {
        self.row = self.row.saturating_add(1);
        self.clamp(map);
    }

    pub fn move_left(&mut self, map: &SeatMap) {
        self.seat = self.seat.saturating_sub(1);
        self.clamp(map);
    }

    pub fn move_right(&mut self, map: &SeatMap) {
        self.seat = self.seat.saturating_add(1);
        self.clamp(map);
    }

    pub fn seat<'a>(&self, map: &'a SeatMap) -> Option<&'a Seat> {
        map.seat_at(self.row, self.seat)
    }
}

/// Work the event loop must do after an action that needs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Refresh,
    Submit,
}

pub struct App {
    pub config: TuiConfig,
    pub theme: SynthBruteTheme,
    pub session: Session,
    pub focus: Pane,
    pub cursor: SeatCursor,
    pub form_field: FormField,
    /// First visible entry of the bookings list.
    pub bookings_offset: usize,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        Self {
            config,
            theme: SynthBruteTheme::synthbrute(),
            session: Session::new(),
            focus: Pane::SeatMap,
            cursor: SeatCursor::default(),
            form_field: FormField::Name,
            bookings_offset: 0,
        }
    }

    /// Whether key presses should be typed into a form field.
    pub fn text_entry(&self) -> bool {
        self.session.modal.is_none() && self.focus == Pane::Passenger && self.form_field.is_text()
    }

    /// Seat under the cursor, to find it again after the map is rebuilt.
    pub fn cursor_anchor(&self) -> Option<SeatId> {
        self.cursor.seat(&self.session.seat_map).map(|seat| seat.id)
    }

    /// Keep cursor and scroll positions inside freshly loaded data.
    ///
    /// The cursor follows `anchor` if that seat is still on the map.
    pub fn sync_after_refresh(&mut self, anchor: Option<SeatId>) {
        let map = &self.session.seat_map;
        match anchor.and_then(|id| map.position_of(&id)) {
            Some((row, seat)) => self.cursor = SeatCursor { row, seat },
            None => self.cursor.clamp(map),
        }
        self.bookings_offset = self
            .bookings_offset
            .min(self.session.bookings.len().saturating_sub(1));
    }

    pub fn handle_action(&mut self, action: Action) -> Effect {
        if self.session.modal.is_some() {
            return match action {
                Action::Quit => Effect::Quit,
                Action::Confirm | Action::Cancel | Action::Select => {
                    self.session.dismiss_modal();
                    Effect::None
                }
                _ => Effect::None,
            };
        }

        match action {
            Action::Quit => return Effect::Quit,
            Action::Refresh => return Effect::Refresh,
            Action::Submit => return Effect::Submit,
            Action::NextPane => self.focus = self.focus.next(),
            Action::PrevPane => self.focus = self.focus.previous(),
            _ => {
                return match self.focus {
                    Pane::SeatMap => self.handle_seat_map(action),
                    Pane::Passenger => self.handle_form(action),
                    Pane::Bookings => self.handle_bookings(action),
                }
            }
        }
        Effect::None
    }

    fn handle_seat_map(&mut self, action: Action) -> Effect {
        let map = &self.session.seat_map;
        match action {
            Action::MoveUp => self.cursor.move_up(map),
            Action::MoveDown => self.cursor.move_down(map),
            Action::MoveLeft => self.cursor.move_left(map),
            Action::MoveRight => self.cursor.move_right(map),
            Action::Select | Action::Confirm => self.select_under_cursor(),
            _ => {}
        }
        Effect::None
    }

    fn select_under_cursor(&mut self) {
        let Some(id) = self.cursor.seat(&self.session.seat_map).map(|seat| seat.id) else {
            return;
        };
        if let Err(err) = self.session.select_seat(&id) {
            self.session.notify(NotificationLevel::Warning, err.to_string());
        }
    }

    fn handle_form(&mut self, action: Action) -> Effect {
        let field = self.form_field;
        match action {
            Action::MoveUp => self.form_field = field.previous(),
            Action::MoveDown => self.form_field = field.next(),
            Action::MoveLeft => {
                self.session.edit_form(|form| field.cycle(form, false));
            }
            Action::MoveRight | Action::Select => {
                self.session.edit_form(|form| field.cycle(form, true));
            }
            Action::Input(c) => {
                self.session.edit_form(|form| field.insert_char(form, c));
            }
            Action::Backspace => {
                self.session.edit_form(|form| field.backspace(form));
            }
            Action::Confirm if field == FormField::Submit => return Effect::Submit,
            Action::Confirm => self.form_field = field.next(),
            _ => {}
        }
        Effect::None
    }

    fn handle_bookings(&mut self, action: Action) -> Effect {
        match action {
            Action::MoveUp => self.bookings_offset = self.bookings_offset.saturating_sub(1),
            Action::MoveDown => {
                let last = self.session.bookings.len().saturating_sub(1);
                self.bookings_offset = (self.bookings_offset + 1).min(last);
            }
            _ => {}
        }
        Effect::None
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use skyseat_core::{FareClass, FlightInfo};

    fn test_config() -> TuiConfig {
        TuiConfig {
            api_base_url: "http://localhost:5000".to_string(),
            request_timeout_ms: 5_000,
            refresh_interval_ms: 10_000,
            log_path: "tmp/skyseat-tui.log".into(),
            currency_symbol: "$".to_string(),
            theme: ThemeConfig {
                name: "synthbrute".to_string(),
            },
        }
    }

    fn seat(id: &str, price: Amount, booked: bool) -> Seat {
        Seat {
            id: id.parse().unwrap(),
            class: FareClass::Economy,
            price,
            booked,
            pref: None,
        }
    }

    fn snapshot(seats: Vec<Seat>) -> FlightSnapshot {
        FlightSnapshot {
            info: FlightInfo {
                flight_no: "AI101".to_string(),
                src: "New York".to_string(),
                dest: "Los Angeles".to_string(),
                dep_time: "10:00 AM".to_string(),
                arr_time: None,
            },
            stats: FlightStats {
                revenue: 0.0,
                occupancy: seats.iter().filter(|s| s.booked).count() as u32,
                total_seats: seats.len() as u32,
            },
            seats: SeatCatalog::new(seats),
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(test_config());
        app.session.apply_snapshot(snapshot(vec![
            seat("1A", 100.0, false),
            seat("1B", 100.0, true),
            seat("1C", 100.0, false),
            seat("2A", 300.0, false),
        ]));
        app
    }

    #[test]
    fn selection_updates_display_and_total() {
        let mut session = loaded_app().session;
        session.select_seat(&"2A".parse().unwrap()).unwrap();
        assert_eq!(session.selected_seat_label(), "2A (Economy)");
        assert_eq!(session.base_price(), Some(300.0));
        assert_eq!(session.total, Some(300.0));
    }

    #[test]
    fn luggage_edit_recomputes_total() {
        let mut session = loaded_app().session;
        session.select_seat(&"1A".parse().unwrap()).unwrap();
        session.edit_form(|form| {
            form.luggage = "25".to_string();
            true
        });
        assert_eq!(session.total, Some(150.0));
    }

    #[test]
    fn total_is_none_without_selection() {
        let mut session = loaded_app().session;
        session.edit_form(|form| {
            form.luggage = "40".to_string();
            true
        });
        assert_eq!(session.total, None);
        assert_eq!(session.selected_seat_label(), "-");
    }

    #[test]
    fn selecting_booked_seat_keeps_previous() {
        let mut session = loaded_app().session;
        session.select_seat(&"1A".parse().unwrap()).unwrap();
        let err = session.select_seat(&"1B".parse().unwrap()).unwrap_err();
        assert!(matches!(err, SelectionError::SeatBooked(_)));
        assert_eq!(session.selection.seat_id(), Some("1A".parse().unwrap()));
    }

    #[test]
    fn unknown_seat_is_rejected() {
        let mut session = loaded_app().session;
        let err = session.select_seat(&"40F".parse().unwrap()).unwrap_err();
        assert!(matches!(err, SelectionError::UnknownSeat(_)));
    }

    #[test]
    fn refresh_drops_selection_booked_elsewhere() {
        let mut app = loaded_app();
        app.session.select_seat(&"1C".parse().unwrap()).unwrap();
        app.session.apply_snapshot(snapshot(vec![
            seat("1A", 100.0, false),
            seat("1C", 100.0, true),
        ]));
        assert!(app.session.selection.is_empty());
        assert_eq!(app.session.total, None);
        let last = app.session.notifications.last().unwrap();
        assert_eq!(last.level, NotificationLevel::Warning);
    }

    #[test]
    fn bookings_are_shown_newest_first() {
        let mut session = Session::new();
        let raw = serde_json::json!([
            {"id": 1, "name": "A", "seatNo": "1A", "amount": 100.0, "bookingTime": "2024-01-01 10:00:00"},
            {"id": 2, "name": "B", "seatNo": "1C", "amount": 100.0, "bookingTime": "2024-01-01 11:00:00"}
        ]);
        session.apply_bookings(serde_json::from_value(raw).unwrap());
        let ids: Vec<u64> = session.bookings.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn begin_submission_requires_seat() {
        let mut session = loaded_app().session;
        assert!(matches!(
            session.begin_submission(),
            Err(SubmitError::NoSeatSelected)
        ));
        assert!(!session.submitting);
    }

    #[test]
    fn begin_submission_blocks_double_submit() {
        let mut session = loaded_app().session;
        session.select_seat(&"1A".parse().unwrap()).unwrap();
        let request = session.begin_submission().unwrap();
        assert_eq!(request.seat_no, "1A".parse().unwrap());
        assert!(matches!(session.begin_submission(), Err(SubmitError::InFlight)));
        session.finish_submission();
        assert!(session.begin_submission().is_ok());
    }

    #[test]
    fn cursor_selects_seat_under_it() {
        let mut app = loaded_app();
        app.handle_action(Action::MoveRight);
        app.handle_action(Action::MoveRight);
        assert_eq!(app.handle_action(Action::Select), Effect::None);
        assert_eq!(app.session.selection.seat_id(), Some("1C".parse().unwrap()));
    }

    #[test]
    fn selecting_booked_seat_under_cursor_warns() {
        let mut app = loaded_app();
        app.handle_action(Action::MoveRight);
        app.handle_action(Action::Confirm);
        assert!(app.session.selection.is_empty());
        assert_eq!(
            app.session.notifications.last().map(|n| n.level),
            Some(NotificationLevel::Warning)
        );
    }

    #[test]
    fn cursor_clamps_to_short_rows() {
        let mut app = loaded_app();
        for _ in 0..5 {
            app.handle_action(Action::MoveRight);
        }
        assert_eq!(app.cursor, SeatCursor { row: 0, seat: 2 });
        app.handle_action(Action::MoveDown);
        assert_eq!(app.cursor, SeatCursor { row: 1, seat: 0 });
        app.handle_action(Action::MoveDown);
        assert_eq!(app.cursor, SeatCursor { row: 1, seat: 0 });
    }

    #[test]
    fn modal_blocks_other_input() {
        let mut app = loaded_app();
        app.session.alert("Please select a seat first");
        assert_eq!(app.handle_action(Action::NextPane), Effect::None);
        assert_eq!(app.focus, Pane::SeatMap);
        assert_eq!(app.handle_action(Action::Submit), Effect::None);
        app.handle_action(Action::Cancel);
        assert!(app.session.modal.is_none());
    }

    #[test]
    fn form_typing_and_submit_button() {
        let mut app = loaded_app();
        app.handle_action(Action::NextPane);
        assert!(app.text_entry());
        app.handle_action(Action::Input('Z'));
        assert_eq!(app.session.form.name, "Z");

        while app.form_field != FormField::Submit {
            app.handle_action(Action::MoveDown);
        }
        assert!(!app.text_entry());
        assert_eq!(app.handle_action(Action::Confirm), Effect::Submit);
    }

    #[test]
    fn enter_advances_through_fields() {
        let mut app = loaded_app();
        app.focus = Pane::Passenger;
        app.handle_action(Action::Confirm);
        assert_eq!(app.form_field, FormField::Phone);
    }

    #[test]
    fn complete_booking_resets_state() {
        let mut session = loaded_app().session;
        session.select_seat(&"1A".parse().unwrap()).unwrap();
        session.form.name = "Ada".to_string();
        let booking: Booking = serde_json::from_value(serde_json::json!({
            "id": 9, "name": "Ada", "seatNo": "1A", "amount": 100.0,
            "bookingTime": "2024-01-01 10:00:00"
        }))
        .unwrap();

        session.complete_booking(&booking);

        assert!(session.selection.is_empty());
        assert_eq!(session.form, BookingForm::default());
        assert_eq!(session.total, None);
        assert_eq!(
            session.modal.as_ref().map(|m| m.message.as_str()),
            Some("Booking #9 Confirmed!")
        );
    }

    #[test]
    fn cursor_follows_its_seat_across_refresh() {
        let mut app = loaded_app();
        app.handle_action(Action::MoveDown);
        let anchor = app.cursor_anchor();
        assert_eq!(anchor, Some("2A".parse().unwrap()));

        app.session.apply_snapshot(snapshot(vec![
            seat("1A", 100.0, false),
            seat("1C", 100.0, false),
            seat("2A", 300.0, false),
            seat("3A", 300.0, false),
        ]));
        app.sync_after_refresh(anchor);
        assert_eq!(app.cursor, SeatCursor { row: 1, seat: 0 });

        app.session.apply_snapshot(snapshot(vec![
            seat("0A", 100.0, false),
            seat("1A", 100.0, false),
            seat("2A", 300.0, false),
        ]));
        app.sync_after_refresh(anchor);
        assert_eq!(app.cursor, SeatCursor { row: 2, seat: 0 });
    }

    #[test]
    fn cursor_clamps_when_its_seat_disappears() {
        let mut app = loaded_app();
        app.handle_action(Action::MoveDown);
        let anchor = app.cursor_anchor();
        app.session.apply_snapshot(snapshot(vec![seat("1A", 100.0, false)]));
        app.sync_after_refresh(anchor);
        assert_eq!(app.cursor, SeatCursor { row: 0, seat: 0 });
    }

    #[test]
    fn stale_notification_gives_way_to_help() {
        let mut session = Session::new();
        session.notify(NotificationLevel::Info, "Seat 1A selected");
        let now = Utc::now();
        assert!(session.current_notification(now).is_some());

        let later = now + chrono::Duration::seconds(crate::notifications::NOTIFICATION_TTL_SECS + 1);
        assert!(session.current_notification(later).is_none());
        assert_eq!(session.notifications.len(), 1);
    }

    #[test]
    fn notifications_are_bounded() {
        let mut session = Session::new();
        for i in 0..(MAX_NOTIFICATIONS + 10) {
            session.notify(NotificationLevel::Info, format!("n{}", i));
        }
        assert_eq!(session.notifications.len(), MAX_NOTIFICATIONS);
        assert_eq!(
            session.notifications.last().map(|n| n.message.as_str()),
            Some(format!("n{}", MAX_NOTIFICATIONS + 9).as_str())
        );
    }
}
