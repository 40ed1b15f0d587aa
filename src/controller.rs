//! The status LED component.
//!
//! [`StatusLed`] owns the signal set, the render bookkeeping, and the
//! transition history. The host drives it with two entry points on one
//! thread: the periodic [`tick`](StatusLed::tick) and the occasional
//! [`handle_user_command`](StatusLed::handle_user_command). All I/O flows
//! through port traits passed at the call sites, so the whole component
//! runs against mocks in tests.
//!
//! ```text
//!  HealthSource ──▶ ┌─────────────────────────┐
//!                   │        StatusLed         │ ──▶ LightSink
//!  notify_* ───────▶│ resolve · effect · render │
//!                   └─────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::{Color, LedConfig};
use crate::diagnostics::{Snapshot, TransitionLog};
use crate::pattern::effect_for;
use crate::ports::{HealthSource, LightSink};
use crate::render::render;
use crate::resolver::resolve;
use crate::signals::SignalSet;
use crate::state::{PriorityMode, StatusState};

/// A manual light command from the host's control surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserCommand {
    pub on: bool,
    pub color: Color,
    /// The command's own brightness, independent of the status brightness.
    pub brightness: f32,
}

/// Priority-arbitrated RGB status LED.
pub struct StatusLed {
    config: LedConfig,
    signals: SignalSet,

    /// State currently shown.
    current: StatusState,
    /// When `current` was entered.
    current_since: u32,
    /// Previously settled status state; feeds the resolver's manual hold
    /// window. A `User` verdict leaves it untouched so the window stays
    /// anchored at the `Ok` entry it measures from.
    last_state: StatusState,
    /// When `last_state` was entered.
    last_change_at: u32,

    blink_on: bool,
    first_tick: bool,
    history: TransitionLog,
}

impl StatusLed {
    pub fn new(config: LedConfig) -> Self {
        Self {
            config,
            signals: SignalSet::new(),
            current: StatusState::Boot,
            current_since: 0,
            last_state: StatusState::None,
            last_change_at: 0,
            blink_on: false,
            first_tick: true,
            history: TransitionLog::new(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Zero all channels, stamp the boot clock, and dump the configuration.
    pub fn setup(&mut self, now_ms: u32, sink: &mut impl LightSink) {
        info!("status LED starting");
        sink.set_red(0.0);
        sink.set_green(0.0);
        sink.set_blue(0.0);
        self.signals.mark_boot(now_ms);
        self.config.log_summary();
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// One arbitration + render cycle.
    ///
    /// The first call only anchors the transition clock; output starts on
    /// the second. `health` is sampled exactly once per tick.
    pub fn tick(&mut self, now_ms: u32, health: &impl HealthSource, sink: &mut impl LightSink) {
        if self.first_tick {
            self.first_tick = false;
            self.current_since = now_ms;
            self.last_change_at = now_ms;
            return;
        }

        self.signals.notify_health_bits(health.health_bits());

        let was_user = self.current == StatusState::User;
        let next = resolve(
            &self.signals,
            &self.config,
            now_ms,
            self.last_state,
            self.last_change_at,
        );

        // In status-priority mode a manual gesture is one-shot: the first
        // tick where status shows through again consumes it.
        if self.config.priority_mode == PriorityMode::Status && next != StatusState::User {
            self.signals.user_control_active = false;
        }

        if next != self.current {
            self.enter(next, now_ms);
        }

        // The settled-status tracker skips `User`: while the hold runs it
        // keeps pointing at the `Ok` entry the window measures from, and
        // it restamps when status reasserts afterwards.
        if next != StatusState::User && (next != self.last_state || was_user) {
            self.last_state = next;
            self.last_change_at = now_ms;
        }

        let effect = effect_for(next, &self.config);
        render(effect, self.config.brightness, now_ms, &mut self.blink_on, sink);
    }

    /// Enter `next` as the shown state.
    fn enter(&mut self, next: StatusState, now_ms: u32) {
        debug!("status {} -> {}", self.current.name(), next.name());
        self.history.record(self.current, next, now_ms);
        self.current = next;
        self.current_since = now_ms;
        // Blink patterns restart their phase at every visible change.
        self.blink_on = false;
    }

    // ── Command handling ──────────────────────────────────────

    /// Accept a manual light command.
    ///
    /// In user-priority mode the command drives the channels immediately.
    /// In status-priority mode it only latches the gesture; the next tick
    /// decides whether the hold window shows it.
    pub fn handle_user_command(
        &mut self,
        cmd: &UserCommand,
        now_ms: u32,
        sink: &mut impl LightSink,
    ) {
        debug!(
            "user command: on={} brightness={:.2}",
            cmd.on, cmd.brightness
        );
        self.signals.user_control_active = true;

        if self.config.priority_mode == PriorityMode::User {
            if self.current != StatusState::User {
                self.enter(StatusState::User, now_ms);
            }
            let gain = if cmd.on { cmd.brightness } else { 0.0 };
            sink.set_red(cmd.color.r * gain);
            sink.set_green(cmd.color.g * gain);
            sink.set_blue(cmd.color.b * gain);
        }
    }

    // ── Signal ingestion ──────────────────────────────────────

    pub fn notify_wifi(&mut self, connected: bool) {
        self.signals.notify_wifi(connected);
    }

    pub fn notify_api(&mut self, connected: bool) {
        self.signals.notify_api(connected);
    }

    pub fn notify_ota_begin(&mut self, now_ms: u32) {
        self.signals.notify_ota_begin(now_ms);
    }

    pub fn notify_ota_progress(&mut self, now_ms: u32) {
        self.signals.notify_ota_progress(now_ms);
    }

    pub fn notify_ota_end(&mut self) {
        self.signals.notify_ota_end();
    }

    pub fn notify_ota_error(&mut self, now_ms: u32) {
        self.signals.notify_ota_error(now_ms);
    }

    /// Manual alternative to the injected [`HealthSource`].
    pub fn notify_health_bits(&mut self, bits: u32) {
        self.signals.notify_health_bits(bits);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> StatusState {
        self.current
    }

    pub fn config(&self) -> &LedConfig {
        &self.config
    }

    pub fn diagnostics(&self, now_ms: u32) -> Snapshot {
        Snapshot {
            state: self.current,
            ms_in_state: now_ms.wrapping_sub(self.current_since),
            transitions: self.history.total(),
            recent: self.history.recent(),
        }
    }
}
