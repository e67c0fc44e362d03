use std::time::Duration;

pub const HEADLINE: &str =
    "Software Developer specializing in Python, FastAPI, SQL and Artificial Intelligence.";
pub const START_DELAY: Duration = Duration::from_millis(500);
pub const CHAR_INTERVAL: Duration = Duration::from_millis(50);

/// 逐字打出標題的狀態機
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            index: 0,
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// 目前已打出的文字
    pub fn current(&self) -> String {
        self.chars[..self.index].iter().collect()
    }

    pub fn full_text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// 前進一個字元，已完成則回傳 None
    pub fn advance(&mut self) -> Option<char> {
        let next = self.chars.get(self.index).copied()?;
        self.index += 1;
        Some(next)
    }

    /// 依延遲逐字播放，每個畫面呼叫一次 `on_frame`。
    ///
    /// 給互動式 host 使用的 API；靜態建置只寫入 `full_text()`。
    pub async fn play<F>(&mut self, mut on_frame: F)
    where
        F: FnMut(&str),
    {
        self.reset();
        tokio::time::sleep(START_DELAY).await;
        while self.advance().is_some() {
            on_frame(&self.current());
            if !self.is_complete() {
                tokio::time::sleep(CHAR_INTERVAL).await;
            }
        }
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(HEADLINE)
    }
}
