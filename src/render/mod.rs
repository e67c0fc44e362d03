pub mod education;
pub mod experience;
pub mod project;
pub mod review;
pub mod slug;

use crate::page::{ElementId, PageView};
use crate::utils::error::Result;

/// 單筆記錄轉成 HTML 片段；`index` 為在清單中的位置
pub trait Render {
    fn render(&self, index: usize) -> Result<String>;
}

/// 卡片進場動畫延遲（毫秒）
pub(crate) fn aos_delay(index: usize) -> usize {
    index * 100
}

pub struct Renderer;

impl Renderer {
    /// 依輸入順序逐筆附加到容器，回傳附加的數量
    pub fn render<T: Render>(view: &mut PageView, container: ElementId, items: &[T]) -> Result<usize> {
        for (index, item) in items.iter().enumerate() {
            let fragment = item.render(index)?;
            view.append(container, fragment);
        }
        tracing::debug!("Rendered {} items into #{}", items.len(), container);
        Ok(items.len())
    }
}
