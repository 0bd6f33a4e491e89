use log::info;

use crate::Scalar;

/// Receives the cost at the reporting cadence of a training run.
///
/// Purely observational: drivers behave identically with any reporter.
pub trait Progress<F> {
    fn report(&mut self, epoch: usize, loss: F);
}

/// Reports nothing.
impl<F> Progress<F> for () {
    fn report(&mut self, _epoch: usize, _loss: F) {}
}

impl<F, P: FnMut(usize, F)> Progress<F> for P {
    fn report(&mut self, epoch: usize, loss: F) {
        self(epoch, loss)
    }
}

/// Writes each report to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl<F: Scalar> Progress<F> for LogProgress {
    fn report(&mut self, epoch: usize, loss: F) {
        info!("epoch {epoch}: loss = {loss:.6}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_receive_reports() {
        let mut seen = vec![];
        let mut reporter = |epoch: usize, loss: f32| seen.push((epoch, loss));
        reporter.report(0, 1.5);
        reporter.report(10, 0.5);
        assert_eq!(seen, vec![(0, 1.5), (10, 0.5)]);
    }

    #[test]
    fn silent_and_log_reporters() {
        Progress::<f64>::report(&mut (), 0, 1.0);
        LogProgress.report(0, 1.0_f64);
    }
}
