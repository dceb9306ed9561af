//! Server-rendered HTML. Every page is a pure function of the store, the
//! selected language, and the resolved view state; handlers wrap the
//! returned markup in `Html`.

pub mod pages;

use std::borrow::Cow;

use crate::models::Language;
use crate::services::i18n;

/// Escapes text for safe interpolation into markup.
pub fn esc(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Appends the active language to an internal link so navigation keeps
/// the visitor's selection.
pub fn href(path: &str, language: Language) -> String {
    format!("{}?lang={}", path, language.code())
}

fn nav_link(path: &str, label: &str, language: Language) -> String {
    format!(
        r#"<a class="nav-link" href="{}">{}</a>"#,
        href(path, language),
        esc(label)
    )
}

fn language_switcher(current_path: &str, language: Language) -> String {
    let mut out = String::from(r#"<span class="lang-switch">"#);
    for lang in Language::ALL {
        let class = if lang == language { "lang active" } else { "lang" };
        out.push_str(&format!(
            r#"<a class="{}" href="{}">{}</a>"#,
            class,
            href(current_path, lang),
            lang.native_name()
        ));
    }
    out.push_str("</span>");
    out
}

/// Wraps page body markup in the shared chrome: header navigation,
/// language switcher, footer.
pub fn layout(language: Language, current_path: &str, title: &str, body: &str) -> String {
    let t = i18n::ui(language);
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} — {site}</title>
<style>
body {{ font-family: Georgia, 'Noto Serif Devanagari', serif; margin: 0; color: #3b1d12; background: #fff8ef; }}
header {{ background: linear-gradient(90deg, #f59e0b, #b91c1c); padding: 14px 24px; display: flex; align-items: center; gap: 24px; flex-wrap: wrap; }}
header .om {{ font-size: 2rem; color: #fff; }}
header .brand {{ color: #fff; font-weight: bold; font-size: 1.3rem; text-decoration: none; }}
.nav-link {{ color: #fff7e6; text-decoration: none; font-weight: 600; }}
.nav-link:hover {{ color: #fde68a; }}
.lang-switch {{ margin-left: auto; }}
.lang {{ color: #fff7e6; text-decoration: none; margin-left: 10px; }}
.lang.active {{ color: #78350f; background: #fde68a; border-radius: 9999px; padding: 2px 10px; }}
main {{ max-width: 960px; margin: 0 auto; padding: 32px 24px 64px; }}
.card {{ background: #fff; border: 1px solid #fcd9a8; border-radius: 18px; padding: 24px; margin-bottom: 20px; box-shadow: 0 2px 8px rgba(185,28,28,0.06); }}
.grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 20px; }}
.devanagari {{ font-size: 1.4rem; line-height: 2; }}
.muted {{ color: #92400e; }}
.pill {{ display: inline-block; background: linear-gradient(90deg, #f59e0b, #b91c1c); color: #fff; border-radius: 9999px; padding: 4px 14px; font-size: 0.85rem; }}
.btn {{ display: inline-block; background: linear-gradient(90deg, #f59e0b, #b91c1c); color: #fff; border: none; border-radius: 9999px; padding: 12px 26px; font-weight: 700; text-decoration: none; cursor: pointer; }}
.btn.alt {{ background: #fff; color: #b45309; border: 2px solid #f59e0b; }}
.nav-row {{ display: flex; gap: 16px; margin-top: 28px; }}
.nav-row a {{ flex: 1; text-align: center; }}
.notice {{ background: #ecfdf5; border: 1px solid #34d399; border-radius: 12px; padding: 12px 18px; margin-bottom: 20px; }}
.error {{ background: #fef2f2; border: 1px solid #f87171; border-radius: 12px; padding: 12px 18px; margin-bottom: 20px; }}
footer {{ text-align: center; padding: 24px; color: #92400e; border-top: 1px solid #fcd9a8; }}
input, select {{ width: 100%; padding: 12px; border: 2px solid #fcd9a8; border-radius: 12px; box-sizing: border-box; font-size: 1rem; }}
label {{ display: block; font-weight: 700; margin: 14px 0 6px; }}
iframe {{ width: 100%; aspect-ratio: 16 / 9; border: 0; border-radius: 18px; }}
.stat {{ font-size: 2.4rem; font-weight: 800; background: linear-gradient(90deg, #f59e0b, #b91c1c); -webkit-background-clip: text; color: transparent; }}
</style>
</head>
<body>
<header>
<a class="brand" href="{home_href}"><span class="om">ॐ</span> {site}</a>
{home_link}
{chapters_link}
{gallery_link}
{donate_link}
{admin_link}
{switcher}
</header>
<main>
{body}
</main>
<footer>{site} · {tagline}</footer>
</body>
</html>"#,
        lang = language.code(),
        title = esc(title),
        site = esc(t.site_name),
        home_href = href("/", language),
        home_link = nav_link("/", t.home, language),
        chapters_link = nav_link("/chapters", t.chapters, language),
        gallery_link = nav_link("/gallery", t.gallery, language),
        donate_link = nav_link("/donate", t.donate, language),
        admin_link = nav_link("/admin", t.admin, language),
        switcher = language_switcher(current_path, language),
        body = body,
        tagline = esc(t.tagline),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_carry_the_active_language() {
        assert_eq!(href("/chapters", Language::Hi), "/chapters?lang=hi");
        assert_eq!(href("/", Language::En), "/?lang=en");
    }

    #[test]
    fn layout_escapes_the_title() {
        let page = layout(Language::En, "/", "<script>", "body");
        assert!(!page.contains("<title><script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn layout_renders_chrome_in_the_selected_language() {
        let page = layout(Language::Hi, "/", "t", "body");
        assert!(page.contains("गीता प्रेरणा"));
        assert!(page.contains("अध्याय"));
    }
}
