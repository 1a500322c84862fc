//! Fixed-layout text panel shown over the 3D view.

/// Handle to a block appended to a [`DomSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(u64);

/// The DOM operations the overlay needs.
pub trait DomSurface {
    fn append_text_block(&mut self, html: String) -> BlockId;
    fn remove_text_block(&mut self, id: BlockId);
}

const PANEL_STYLE: &str = "position: absolute; top: 0; width: 100%; margin: 0 auto; \
     color: white; background: black; opacity: 0.8; \
     font-size: 1.2em; font-family: Verdana; text-align: center;";

/// The case-count panel. Owns the handle of the block it last rendered.
#[derive(Debug, Default)]
pub struct Overlay {
    current: Option<BlockId>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous panel with one showing `date` and `count`.
    pub fn render<S: DomSurface + ?Sized>(&mut self, date: &str, count: u64, surface: &mut S) {
        if let Some(old) = self.current.take() {
            surface.remove_text_block(old);
        }
        self.current = Some(surface.append_text_block(panel_html(date, count)));
    }
}

fn panel_html(date: &str, count: u64) -> String {
    format!(
        "<div style=\"{PANEL_STYLE}\">\
         <h3>Three JS Covid Cases 3D Visualisation</h3>\
         <p>New Covid Cases England {date}</p>\
         <div class=\"timerSec\"><p>{count}</p>\
         <p> Data Source : gov.uk</p></div>\
         </div>",
        date = escape(date),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// An in-memory page body that the overlay writes into.
#[derive(Debug, Default)]
pub struct HtmlPage {
    next_id: u64,
    blocks: Vec<(BlockId, String)>,
}

impl HtmlPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|(_, html)| html.as_str())
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Full standalone document with the blocks in insertion order.
    pub fn to_document(&self, title: &str) -> String {
        let mut doc = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n\
             <body style=\"overflow: hidden; margin: 0;\">\n",
            escape(title)
        );
        for html in self.blocks() {
            doc.push_str("<div>");
            doc.push_str(html);
            doc.push_str("</div>\n");
        }
        doc.push_str("</body>\n</html>\n");
        doc
    }
}

impl DomSurface for HtmlPage {
    fn append_text_block(&mut self, html: String) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        self.blocks.push((id, html));
        id
    }

    fn remove_text_block(&mut self, id: BlockId) {
        self.blocks.retain(|(block, _)| *block != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_shows_date_and_count() {
        let mut page = HtmlPage::new();
        Overlay::new().render("2021-01-01", 543, &mut page);

        assert_eq!(page.len(), 1);
        let html = page.blocks().next().unwrap();
        assert!(html.contains("2021-01-01"));
        assert!(html.contains("543"));
        assert!(html.contains("New Covid Cases England 2021-01-01"));
        assert!(html.contains("Data Source : gov.uk"));
    }

    #[test]
    fn second_render_replaces_first() {
        let mut page = HtmlPage::new();
        let mut overlay = Overlay::new();
        overlay.render("2021-01-01", 543, &mut page);
        overlay.render("2021-01-02", 61_000, &mut page);

        assert_eq!(page.len(), 1);
        let html = page.blocks().next().unwrap();
        assert!(html.contains("2021-01-02") && html.contains("61000"));
        assert!(!html.contains("2021-01-01"));
    }

    #[test]
    fn leaves_other_blocks_alone() {
        let mut page = HtmlPage::new();
        page.append_text_block("<p>stats</p>".into());
        let mut overlay = Overlay::new();
        overlay.render("2021-01-01", 1, &mut page);
        overlay.render("2021-01-02", 2, &mut page);

        let blocks: Vec<&str> = page.blocks().collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "<p>stats</p>");
    }

    #[test]
    fn date_is_escaped() {
        let mut page = HtmlPage::new();
        Overlay::new().render("<script>x</script>", 0, &mut page);
        let html = page.blocks().next().unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn document_wraps_blocks() {
        let mut page = HtmlPage::new();
        Overlay::new().render("2021-01-01", 543, &mut page);
        let doc = page.to_document("Cases");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Cases</title>"));
        assert!(doc.contains("overflow: hidden"));
        assert!(doc.contains("543"));
        assert!(doc.trim_end().ends_with("</html>"));
    }
}
