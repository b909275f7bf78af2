//! Main TUI application state and the host loop

use crate::config::{Config, MAX_FPS, MIN_FPS};
use crate::engine::{Algorithm, Direction, SortStep, StepResult};
use crate::sequence::Sequence;
use crate::ui::panes::{self, Highlight, RunState, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction as LayoutDirection, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// The main application state
pub struct App {
    /// Validated startup settings; bounds for regenerated sequences
    pub config: Config,

    /// The values being sorted
    pub sequence: Sequence,

    /// Direction for the next run
    pub direction: Direction,

    /// Algorithm for the next run
    pub algorithm: Algorithm,

    /// Active sort run, if any
    active: Option<Box<dyn SortStep>>,

    /// Whether the last run finished without a reset since
    finished: bool,

    /// Counters for the active or most recent run
    pub comparisons: usize,
    pub swaps: usize,

    /// Bars touched by the last swap
    pub highlights: FxHashMap<usize, Highlight>,

    /// Current tick rate
    pub fps: u32,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    rng: StdRng,
}

impl App {
    /// Create a new app with a freshly generated sequence
    pub fn new(config: Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let sequence = Sequence::generate(config.length, config.min, config.max, &mut rng);
        Self::build(config, sequence, rng)
    }

    /// Create an app around a fixed starting sequence. Reset still draws new
    /// values using the configured bounds.
    pub fn with_sequence(config: Config, sequence: Sequence) -> Self {
        let rng = StdRng::seed_from_u64(config.seed.unwrap_or_default());
        Self::build(config, sequence, rng)
    }

    fn build(config: Config, sequence: Sequence, rng: StdRng) -> Self {
        App {
            direction: config.direction,
            algorithm: config.algorithm,
            fps: config.fps,
            config,
            sequence,
            active: None,
            finished: false,
            comparisons: 0,
            swaps: 0,
            highlights: FxHashMap::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
            rng,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Wait for input no longer than what is left of this tick
            if event::poll(self.poll_timeout(last_tick.elapsed()))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            if self.tick_due(last_tick.elapsed()) {
                self.tick();
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Duration of one frame at the current speed
    pub fn tick_rate(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(MIN_FPS)
    }

    /// How long input polling may block, given the time since the last tick
    pub fn poll_timeout(&self, since_last_tick: Duration) -> Duration {
        self.tick_rate().saturating_sub(since_last_tick)
    }

    /// Whether a full tick has elapsed and the sort should advance
    pub fn tick_due(&self, since_last_tick: Duration) -> bool {
        since_last_tick >= self.tick_rate()
    }

    pub fn is_sorting(&self) -> bool {
        self.active.is_some()
    }

    pub fn run_state(&self) -> RunState {
        if self.active.is_some() {
            RunState::Sorting
        } else if self.finished {
            RunState::Sorted
        } else {
            RunState::Ready
        }
    }

    /// Advance the active run by one step. Returns `None` when idle.
    pub fn tick(&mut self) -> Option<StepResult> {
        let step = self.active.as_mut()?;
        let result = step.advance(&mut self.sequence);
        self.comparisons = step.comparisons();
        self.swaps = step.swaps();

        self.highlights.clear();
        match result {
            StepResult::Swapped { left, right } => {
                self.highlights.insert(left, Highlight::SwapLeft);
                self.highlights.insert(right, Highlight::SwapRight);
            }
            StepResult::Done => {
                self.active = None;
                self.finished = true;
                self.status_message = format!(
                    "{} finished: {} comparisons, {} swaps",
                    self.algorithm, self.comparisons, self.swaps
                );
                info!(
                    algorithm = %self.algorithm,
                    direction = %self.direction,
                    comparisons = self.comparisons,
                    swaps = self.swaps,
                    "sort finished"
                );
            }
        }

        Some(result)
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Header, chart, status bar
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        panes::render_controls_pane(frame, chunks[0], self.direction, self.algorithm);

        let title = format!(
            "{} · {} · {} values",
            self.algorithm,
            self.direction,
            self.sequence.len()
        );
        panes::render_bars_pane(frame, chunks[1], &self.sequence, &self.highlights, &title);

        panes::render_status_bar(
            frame,
            chunks[2],
            &StatusRenderData {
                message: &self.status_message,
                state: self.run_state(),
                algorithm: self.algorithm,
                direction: self.direction,
                comparisons: self.comparisons,
                swaps: self.swaps,
                fps: self.fps,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            KeyCode::Char(' ') => self.start_sort(),
            KeyCode::Char('a') | KeyCode::Char('A') => self.set_direction(Direction::Ascending),
            KeyCode::Char('d') | KeyCode::Char('D') => self.set_direction(Direction::Descending),
            KeyCode::Char('b') | KeyCode::Char('B') => self.set_algorithm(Algorithm::Bubble),
            KeyCode::Char('i') | KeyCode::Char('I') => self.set_algorithm(Algorithm::Insertion),
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_speed(true),
            KeyCode::Char('-') | KeyCode::Char('_') => self.change_speed(false),
            _ => {}
        }
    }

    /// Regenerate the sequence, abandoning any active run
    pub fn reset(&mut self) {
        if self.active.take().is_some() {
            debug!("active sort abandoned by reset");
        }
        self.sequence = Sequence::generate(
            self.config.length,
            self.config.min,
            self.config.max,
            &mut self.rng,
        );
        self.finished = false;
        self.comparisons = 0;
        self.swaps = 0;
        self.highlights.clear();
        self.status_message = "Reset".to_string();
        info!(length = self.sequence.len(), "sequence regenerated");
    }

    /// Start a run with the selected algorithm and direction. No-op while sorting.
    pub fn start_sort(&mut self) {
        if self.is_sorting() {
            return;
        }
        self.active = Some(self.algorithm.start(&self.sequence, self.direction));
        self.finished = false;
        self.comparisons = 0;
        self.swaps = 0;
        self.highlights.clear();
        self.status_message = format!("Sorting with {}...", self.algorithm);
        info!(
            algorithm = %self.algorithm,
            direction = %self.direction,
            length = self.sequence.len(),
            "sort started"
        );
    }

    /// Select the direction for the next run. Ignored while sorting.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.is_sorting() {
            self.status_message = "Cannot change direction while sorting".to_string();
            return;
        }
        self.direction = direction;
        self.status_message = format!("Direction: {}", direction);
        debug!(%direction, "direction selected");
    }

    /// Select the algorithm for the next run. Ignored while sorting.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if self.is_sorting() {
            self.status_message = "Cannot change algorithm while sorting".to_string();
            return;
        }
        self.algorithm = algorithm;
        self.status_message = format!("Algorithm: {}", algorithm);
        debug!(%algorithm, "algorithm selected");
    }

    /// Double or halve the tick rate, within the configured limits
    pub fn change_speed(&mut self, faster: bool) {
        self.fps = if faster {
            self.fps.saturating_mul(2).min(MAX_FPS)
        } else {
            (self.fps / 2).max(MIN_FPS)
        };
        self.status_message = format!("Speed: {} fps", self.fps);
        debug!(fps = self.fps, "speed changed");
    }
}
