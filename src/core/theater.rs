use crate::core::{AmplifierState, ProjectorState, ScreenState, StatusSink};

/// Volume the facade dials in when a movie starts.
pub const MOVIE_VOLUME: u8 = 20;

/// Input source the facade selects when a movie starts.
pub const MOVIE_INPUT: &str = "HDMI";

pub struct Amplifier<S: StatusSink> {
    sink: S,
    state: AmplifierState,
}

impl<S: StatusSink> Amplifier<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            state: AmplifierState::default(),
        }
    }

    pub fn turn_on(&mut self) {
        self.state.powered = true;
        self.sink.status("Amplifier is on");
    }

    pub fn set_volume(&mut self, level: u8) {
        self.state.volume = level;
        self.sink.status(&format!("Volume set to {}%", level));
    }

    pub fn is_powered(&self) -> bool {
        self.state.powered
    }

    pub fn volume(&self) -> u8 {
        self.state.volume
    }
}

pub struct Projector<S: StatusSink> {
    sink: S,
    state: ProjectorState,
}

impl<S: StatusSink> Projector<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            state: ProjectorState::default(),
        }
    }

    pub fn start(&mut self) {
        self.state.running = true;
        self.sink.status("Projector started");
    }

    pub fn set_input(&mut self, source: &str) {
        self.state.input = Some(source.to_string());
        self.sink.status(&format!("Input source: {}", source));
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn input(&self) -> Option<&str> {
        self.state.input.as_deref()
    }
}

pub struct Screen<S: StatusSink> {
    sink: S,
    state: ScreenState,
}

impl<S: StatusSink> Screen<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            state: ScreenState::default(),
        }
    }

    pub fn lower(&mut self) {
        self.state.lowered = true;
        self.sink.status("Screen lowered");
    }

    pub fn is_lowered(&self) -> bool {
        self.state.lowered
    }
}

/// Facade over the three subsystems. Callers get two coarse operations;
/// the per-subsystem call order stays hidden in here.
pub struct HomeTheaterFacade<S: StatusSink> {
    amp: Amplifier<S>,
    projector: Projector<S>,
    screen: Screen<S>,
    sink: S,
}

impl<S: StatusSink> HomeTheaterFacade<S> {
    pub fn new(amp: Amplifier<S>, projector: Projector<S>, screen: Screen<S>, sink: S) -> Self {
        Self {
            amp,
            projector,
            screen,
            sink,
        }
    }

    /// Full startup sequence. Runs unconditionally: no state is queried,
    /// the same five subsystem calls happen on every invocation.
    pub fn start_movie(&mut self) {
        tracing::debug!("facade start_movie");
        self.screen.lower();
        self.amp.turn_on();
        self.amp.set_volume(MOVIE_VOLUME);
        self.projector.start();
        self.projector.set_input(MOVIE_INPUT);
        self.sink.status("The movie is starting!");
    }

    /// Only resets the volume. The amplifier and projector stay powered,
    /// matching the reference behavior.
    pub fn end_movie(&mut self) {
        tracing::debug!("facade end_movie");
        self.sink
            .status("Movie finished. Shutting the system down...");
        self.amp.set_volume(0);
    }
}
