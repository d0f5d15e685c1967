use std::time::{Duration, Instant};

use tessera_core::TileId;
use tessera_generator::{PermutationGenerator, ShuffleSeed};

use crate::{
    Completion, DropTarget, IntentError, Move, PlacementController, PuzzleModel, SessionConfig,
    TileLayout, WinDetector,
};

/// One playable puzzle and its lifecycle.
///
/// A session is (re)built from scratch on start, on [`reset`](Self::reset) and on
/// [`on_resize`](Self::on_resize). Rebuilding discards all progress, including any
/// drag that was in flight, and starts a new generation.
///
/// # Example
///
/// ```
/// use std::time::Instant;
///
/// use tessera_core::TileId;
/// use tessera_game::{Session, SessionConfig};
///
/// let mut session = Session::new(SessionConfig::default(), 48.0);
/// session.direct_place(TileId::new(0), Instant::now()).unwrap();
/// assert_eq!(session.model().solved_count(), 1);
///
/// session.on_resize(64.0);
/// assert_eq!(session.model().solved_count(), 0);
/// assert_eq!(session.layout().tile_size(), 64.0);
/// assert_eq!(session.generation(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    generator: PermutationGenerator,
    layout: TileLayout,
    generation: u64,
    seed: ShuffleSeed,
    controller: PlacementController,
}

impl Session {
    /// Creates the first lifecycle.
    ///
    /// The layout uses [`SessionConfig::initial_seed`] when set.
    #[must_use]
    pub fn new(config: SessionConfig, tile_size: f32) -> Self {
        let generator = PermutationGenerator::new();
        let seed = config.initial_seed.unwrap_or_else(ShuffleSeed::random);
        let generation = 1;
        let controller = build_controller(&generator, &config, generation, seed);
        let layout = TileLayout::new(tile_size);
        log::info!(
            "puzzle generation {generation} started (seed {seed}, tile size {})",
            layout.tile_size()
        );
        Self {
            config,
            generator,
            layout,
            generation,
            seed,
            controller,
        }
    }

    /// Rebuilds the puzzle from a fresh random layout with the given tile size.
    pub fn initialize(&mut self, tile_size: f32) {
        self.teardown();
        self.layout = TileLayout::new(tile_size);
        self.generation += 1;
        self.seed = ShuffleSeed::random();
        self.controller =
            build_controller(&self.generator, &self.config, self.generation, self.seed);
        log::info!(
            "puzzle generation {} started (seed {}, tile size {})",
            self.generation,
            self.seed,
            self.layout.tile_size()
        );
    }

    /// Discards all progress and starts over with the current tile size.
    pub fn reset(&mut self) {
        self.initialize(self.layout.tile_size());
    }

    /// Discards all progress and starts over with a new tile size.
    ///
    /// Tiles are not repositioned in place; any viewport change starts a new puzzle.
    pub fn on_resize(&mut self, tile_size: f32) {
        log::debug!("viewport resized, tile size {tile_size}");
        self.initialize(tile_size);
    }

    /// Voids any drag in flight.
    pub fn teardown(&mut self) {
        if let Some(tile) = self.controller.cancel_drag() {
            log::debug!("dropping in-flight drag of tile {tile}");
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the model of the current lifecycle.
    #[must_use]
    pub fn model(&self) -> &PuzzleModel {
        self.controller.model()
    }

    /// Returns the controller of the current lifecycle.
    #[must_use]
    pub fn controller(&self) -> &PlacementController {
        &self.controller
    }

    /// Returns the board geometry.
    #[must_use]
    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// Returns the lifecycle generation, starting at 1.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the seed of the current layout.
    #[must_use]
    pub fn seed(&self) -> ShuffleSeed {
        self.seed
    }

    /// Returns `true` once every tile is solved.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.model().all_solved()
    }

    /// See [`PlacementController::begin_drag`].
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::TilePinned`] for solved tiles.
    pub fn begin_drag(&mut self, tile: TileId) -> Result<(), IntentError> {
        self.controller.begin_drag(tile)
    }

    /// See [`PlacementController::drop_on`].
    ///
    /// # Errors
    ///
    /// Returns an [`IntentError`] if the drop causes no transition.
    pub fn drop_on(&mut self, target: DropTarget, now: Instant) -> Result<Move, IntentError> {
        self.controller.drop_on(target, now)
    }

    /// See [`PlacementController::cancel_drag`].
    pub fn cancel_drag(&mut self) -> Option<TileId> {
        self.controller.cancel_drag()
    }

    /// See [`PlacementController::direct_place`].
    ///
    /// # Errors
    ///
    /// Returns an [`IntentError`] if the tile's home slot is occupied.
    pub fn direct_place(&mut self, tile: TileId, now: Instant) -> Result<Move, IntentError> {
        self.controller.direct_place(tile, now)
    }

    /// Returns the completion event once it is due.
    pub fn poll_completion(&mut self, now: Instant) -> Option<Completion> {
        self.controller.poll_completion(now)
    }

    /// Returns how long until a pending completion event becomes due.
    #[must_use]
    pub fn time_until_completion(&self, now: Instant) -> Option<Duration> {
        self.controller.time_until_completion(now)
    }
}

fn build_controller(
    generator: &PermutationGenerator,
    config: &SessionConfig,
    generation: u64,
    seed: ShuffleSeed,
) -> PlacementController {
    let permutation = generator.generate_with_seed(seed);
    let model = PuzzleModel::new(&permutation);
    let win = WinDetector::new(generation, config.completion_delay);
    PlacementController::new(model, win)
}
