use std::time::{Duration, Instant};

pub struct MainLoop {
    desired_fps: f32,
}

impl MainLoop {
    pub fn new(desired_fps: f32) -> Self {
        Self { desired_fps }
    }

    pub fn iter(&self) -> MainLoopIterator {
        MainLoopIterator {
            desired_delta_time_in_secs: 1.0 / self.desired_fps,
            last_next_time: Instant::now(),
        }
    }
}

/// Yields the fixed frame time after sleeping off whatever is left of it.
pub struct MainLoopIterator {
    desired_delta_time_in_secs: f32,
    last_next_time: Instant,
}

impl Iterator for MainLoopIterator {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let elapsed_in_secs = self.last_next_time.elapsed().as_secs_f32();

        if elapsed_in_secs < self.desired_delta_time_in_secs {
            std::thread::sleep(Duration::from_secs_f32(
                self.desired_delta_time_in_secs - elapsed_in_secs,
            ));
        }

        self.last_next_time = Instant::now();

        Some(self.desired_delta_time_in_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::MainLoop;

    #[test]
    fn yields_fixed_delta_time() {
        let main_loop = MainLoop::new(100.0);

        let start_time = Instant::now();
        let delta_times = main_loop.iter().take(5).collect::<Vec<_>>();

        assert_eq!(delta_times, vec![0.01; 5]);
        assert!(start_time.elapsed().as_secs_f32() >= 0.04);
    }
}
