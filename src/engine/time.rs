/// Fixed-timestep accumulator: turns variable frame times into a whole
/// number of physics ticks plus an interpolation alpha for rendering.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    /// Simulated seconds since the run started.
    pub elapsed: f32,
}

impl FixedTimestep {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            elapsed: 0.0,
        }
    }

    /// Add one frame and return how many physics ticks are due.
    pub fn advance(&mut self, frame_dt: f32) -> usize {
        self.elapsed += frame_dt;
        self.accumulator += frame_dt;
        let mut ticks = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }

    /// How far into the next physics step this render frame falls (0..1).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}
