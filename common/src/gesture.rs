//! タッチ操作の判定
//!
//! カードとモーダルで同じ判定を使う。
//! 水平方向の移動量が閾値を超えたときだけスワイプとみなし、それ以外はタップ扱い。

use crate::gallery::Direction;

/// スワイプと判定する最小移動量（論理ピクセル）
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// タッチ開始位置と終了位置から移動方向を判定
///
/// 左へのスワイプは次の画像、右へのスワイプは前の画像。
pub fn classify_swipe(start_x: f64, end_x: f64) -> Option<Direction> {
    let delta = end_x - start_x;
    if delta.abs() <= SWIPE_THRESHOLD {
        return None;
    }
    if delta < 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_swipe_is_next() {
        assert_eq!(classify_swipe(200.0, 100.0), Some(Direction::Next));
    }

    #[test]
    fn test_right_swipe_is_prev() {
        assert_eq!(classify_swipe(100.0, 220.0), Some(Direction::Prev));
    }

    #[test]
    fn test_short_move_is_tap() {
        assert_eq!(classify_swipe(100.0, 140.0), None);
        assert_eq!(classify_swipe(100.0, 50.0), None);
        assert_eq!(classify_swipe(100.0, 100.0), None);
    }

    #[test]
    fn test_just_over_threshold() {
        assert_eq!(classify_swipe(100.0, 49.5), Some(Direction::Next));
    }
}
