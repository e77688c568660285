//! G-Code Optimizer
//!
//! Removes redundant commands from generated cut programs.

/// G-code optimization strategies
#[derive(Debug)]
pub struct GCodeOptimizer;

impl GCodeOptimizer {
    /// Remove consecutive duplicate M5 commands
    pub fn remove_redundant_m5(lines: &[String]) -> Vec<String> {
        let mut result = Vec::new();
        let mut last_was_m5 = false;

        for line in lines {
            let trimmed = line.trim();
            if trimmed.starts_with("M5") {
                if !last_was_m5 {
                    result.push(line.clone());
                    last_was_m5 = true;
                }
            } else {
                result.push(line.clone());
                // comments and blank lines do not re-enable the laser
                if !(trimmed.is_empty() || trimmed.starts_with(';')) {
                    last_was_m5 = false;
                }
            }
        }

        result
    }

    /// Remove linear moves that repeat the previous linear move exactly
    pub fn remove_duplicate_moves(lines: &[String]) -> Vec<String> {
        let mut result: Vec<String> = Vec::new();
        let mut last_move: Option<&str> = None;

        for line in lines {
            let trimmed = line.trim();
            if trimmed.starts_with("G1 ") {
                if last_move == Some(trimmed) {
                    continue;
                }
                last_move = Some(trimmed);
            } else if !(trimmed.is_empty() || trimmed.starts_with(';')) {
                last_move = None;
            }
            result.push(line.clone());
        }

        result
    }

    /// Optimize G-code
    pub fn optimize(lines: &[String]) -> Vec<String> {
        let mut optimized = lines.to_vec();
        optimized = Self::remove_redundant_m5(&optimized);
        optimized = Self::remove_duplicate_moves(&optimized);
        optimized
    }
}
