//! Process controller
//!
//! Owns every peripheral and the set points. The mode menu, the set-point
//! editors and the phase pipelines run as plain blocking loops; each loop
//! iteration is one tick and nothing runs between ticks.

use embedded_hal::delay::DelayNs;
use hotplate_hal::ConfigStore;

use crate::config::{ControllerConfig, SetPointKind, SetPoints};
use crate::control::{ActuatorController, Decision};
use crate::state::{PhaseEvent, ProcessPhase};
use crate::traits::{HeaterOutput, InputSource, PlateSensors, TextDisplay};
use crate::units::Celsius;

use super::editor::{edit_step, menu_step, EditStep, MenuStep};
use super::phase::{ActivePhase, Phase, ProgramOutcome, TickOutcome};
use super::program::{Mode, Program};
use super::screens;

/// Top-level hot plate controller
///
/// - `S`: plate sensors
/// - `H`: heater output
/// - `D`: text display
/// - `B`: buttons
/// - `C`: set-point storage
/// - `T`: blocking delay
pub struct Controller<S, H, D, B, C, T> {
    sensors: S,
    heater: H,
    display: D,
    buttons: B,
    store: C,
    delay: T,
    actuator: ActuatorController,
    config: ControllerConfig,
    set_points: SetPoints,
    phase: ProcessPhase,
    mode: Mode,
}

impl<S, H, D, B, C, T> Controller<S, H, D, B, C, T>
where
    S: PlateSensors,
    H: HeaterOutput,
    D: TextDisplay,
    B: InputSource,
    C: ConfigStore,
    T: DelayNs,
{
    /// Create a controller, loading set points from `store`
    ///
    /// The heater is switched off before anything else.
    pub fn new(
        sensors: S,
        mut heater: H,
        display: D,
        buttons: B,
        mut store: C,
        delay: T,
        config: ControllerConfig,
    ) -> Self {
        heater.set_on(false);

        let set_points = SetPoints::load(&mut store);
        #[cfg(feature = "defmt")]
        defmt::info!("Set points: {}", set_points);

        Self {
            sensors,
            heater,
            display,
            buttons,
            store,
            delay,
            actuator: ActuatorController::new(config.min_supply),
            config,
            set_points,
            phase: ProcessPhase::Idle,
            mode: Mode::Normal,
        }
    }

    /// Current process phase
    pub fn phase(&self) -> ProcessPhase {
        self.phase
    }

    /// Current set points
    pub fn set_points(&self) -> &SetPoints {
        &self.set_points
    }

    /// Mode highlighted in the menu (the last one chosen)
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Run forever: banner, then menu and programs in turn
    pub fn run(mut self) -> ! {
        self.boot();

        loop {
            let mode = self.select_mode();
            let _outcome = self.run_mode(mode);
            #[cfg(feature = "defmt")]
            defmt::info!("{} program ended: {}", mode, _outcome);
            self.delay.delay_ms(self.config.splash_ms);
        }
    }

    /// Bring up the display and show the banner
    pub fn boot(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("Hot plate controller starting");
        self.display.init();
        screens::splash(&mut self.display);
        self.delay.delay_ms(self.config.splash_ms);
    }

    /// Show the mode menu until a mode is chosen
    pub fn select_mode(&mut self) -> Mode {
        screens::mode_menu(&mut self.display);

        loop {
            screens::mode_marker(&mut self.display, self.mode);

            match menu_step(self.mode, self.buttons.poll()) {
                MenuStep::Move(mode) => self.mode = mode,
                MenuStep::Choose(mode) => {
                    #[cfg(feature = "defmt")]
                    defmt::info!("Mode selected: {}", mode);
                    return mode;
                }
                MenuStep::Wait => {}
            }

            self.delay.delay_ms(self.config.edit_tick_ms);
        }
    }

    /// Edit one set point until confirmed, then persist it
    pub fn edit(&mut self, kind: SetPointKind) {
        screens::editor(&mut self.display, kind);

        loop {
            let value = self.set_points.get(kind);
            screens::editor_value(&mut self.display, kind, value);

            match edit_step(kind, value, self.buttons.poll()) {
                EditStep::Set(value) => self.set_points.set(kind, value),
                EditStep::Confirm => break,
                EditStep::Wait => {}
            }

            self.delay.delay_ms(self.config.edit_tick_ms);
        }

        self.set_points.persist(kind, &mut self.store);
    }

    /// Edit the mode's set points, then run its program
    pub fn run_mode(&mut self, mode: Mode) -> ProgramOutcome {
        for &kind in mode.set_points() {
            self.edit(kind);
        }

        self.display.clear();
        self.delay.delay_ms(self.config.settle_ms);

        let program = Program::for_mode(mode, &self.set_points);
        self.run_program(&program)
    }

    /// Run every phase of `program` in order
    ///
    /// A fault abandons the remaining phases and blocks until acknowledged.
    pub fn run_program(&mut self, program: &Program) -> ProgramOutcome {
        for &phase in program.phases() {
            if self.run_phase(phase) == TickOutcome::Fault {
                self.await_acknowledge();
                return ProgramOutcome::Faulted;
            }
        }

        self.apply(PhaseEvent::ProgramFinished);
        self.delay.delay_ms(self.config.settle_ms);
        ProgramOutcome::Completed
    }

    /// Tick one phase until it completes or faults
    ///
    /// The heater is off whenever this returns.
    pub fn run_phase(&mut self, phase: Phase) -> TickOutcome {
        let mut active = self.enter(phase);

        loop {
            match self.tick(&mut active) {
                TickOutcome::Continue => self.delay.delay_ms(active.tick_ms(&self.config)),
                outcome => {
                    self.switch(false);
                    #[cfg(feature = "defmt")]
                    defmt::info!("{} ended: {}", phase, outcome);
                    return outcome;
                }
            }
        }
    }

    /// Start a phase and draw its screen
    pub fn enter(&mut self, phase: Phase) -> ActivePhase {
        #[cfg(feature = "defmt")]
        defmt::info!("Entering {}", phase);

        if phase == Phase::Cool {
            self.switch(false);
        }

        self.apply(phase.entry_event());
        screens::phase(&mut self.display, &phase);

        ActivePhase::new(phase)
    }

    /// Run one tick of an active phase
    ///
    /// Every tick that completes without a fault polls the buttons exactly
    /// once; Select ends the phase.
    pub fn tick(&mut self, active: &mut ActivePhase) -> TickOutcome {
        match active.phase() {
            Phase::Heat {
                target,
                stop_on_reached,
            } => {
                let Some(measured) = self.regulate(target) else {
                    return TickOutcome::Fault;
                };

                let cancelled = self.buttons.poll().select;
                if cancelled || (stop_on_reached && measured >= target) {
                    TickOutcome::PhaseComplete
                } else {
                    TickOutcome::Continue
                }
            }

            Phase::Hold { target, .. } => {
                if active.remaining() == 0 {
                    return TickOutcome::PhaseComplete;
                }

                if self.regulate(target).is_none() {
                    return TickOutcome::Fault;
                }

                active.count_down();
                screens::remaining(&mut self.display, active.remaining());

                if self.buttons.poll().select {
                    TickOutcome::PhaseComplete
                } else {
                    TickOutcome::Continue
                }
            }

            Phase::Cool => {
                let measured = self.sensors.read_temperature();
                screens::temperature(&mut self.display, measured);

                if self.buttons.poll().select {
                    TickOutcome::PhaseComplete
                } else {
                    TickOutcome::Continue
                }
            }
        }
    }

    /// Sample, decide and apply for one heating tick
    ///
    /// Returns the measured temperature, or `None` on a supply fault, in
    /// which case the heater is already off and the phase is `Fault`.
    fn regulate(&mut self, target: Celsius) -> Option<Celsius> {
        let measured = self.sensors.read_temperature();
        let supply = self.sensors.read_voltage();

        let decision = self.actuator.decide(measured, target, supply);
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "{} C / {} C at {} mV: {}",
            measured.degrees(),
            target.degrees(),
            supply.millivolts(),
            decision
        );

        if decision == Decision::Fault {
            self.switch(false);
            #[cfg(feature = "defmt")]
            defmt::warn!("Supply at {} mV, below floor", supply.millivolts());
            self.apply(PhaseEvent::UnderVoltage);
            return None;
        }

        self.switch(decision.heater_on());
        screens::temperature(&mut self.display, measured);
        Some(measured)
    }

    /// Show the fault screen until Select, then return to Idle
    fn await_acknowledge(&mut self) {
        screens::fault(&mut self.display);

        while !self.buttons.poll().select {
            self.delay.delay_ms(self.config.tick_ms);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Fault acknowledged");
        self.apply(PhaseEvent::Acknowledge);
    }

    /// Drive the heater, refusing to energize outside heating phases
    fn switch(&mut self, on: bool) {
        let on = on && self.phase.heater_allowed();

        if on != self.heater.is_on() {
            #[cfg(feature = "defmt")]
            defmt::debug!("Heater {}", if on { "on" } else { "off" });
            screens::output(&mut self.display, on);
        }

        self.heater.set_on(on);
    }

    fn apply(&mut self, event: PhaseEvent) {
        let next = self.phase.transition(event);
        if next != self.phase {
            #[cfg(feature = "defmt")]
            defmt::debug!("Phase {} -> {}", self.phase, next);
        }
        self.phase = next;
    }
}
