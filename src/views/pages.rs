//! Individual page renderers. Each takes the store and the selected
//! language and returns a complete HTML document.

use crate::models::{Chapter, Language, Shloka};
use crate::services::i18n;
use crate::services::nav::PageView;
use crate::services::store::ContentStore;

use super::{esc, href, layout};

fn chapter_path(chapter: u32) -> String {
    format!("/chapters/{}", chapter)
}

fn verse_path(chapter: u32, verse: u32) -> String {
    format!("/chapters/{}/verses/{}", chapter, verse)
}

pub fn home(store: &ContentStore, language: Language) -> String {
    let t = i18n::ui(language);
    let mut body = format!(
        r#"<section class="card" style="text-align:center">
<div style="font-size:3rem">ॐ</div>
<h1>{site}</h1>
<p class="muted">{tagline}</p>
<p>
<a class="btn" href="{chapters}">{explore}</a>
<a class="btn alt" href="{donate}">{donate_label}</a>
</p>
</section>"#,
        site = esc(t.site_name),
        tagline = esc(t.tagline),
        chapters = href("/chapters", language),
        explore = esc(t.explore_chapters),
        donate = href("/donate", language),
        donate_label = esc(t.donate),
    );

    body.push_str(&format!(
        r#"<h2 style="text-align:center">{}</h2>"#,
        esc(t.features)
    ));
    body.push_str(r#"<div class="grid">"#);
    let feature_cards = [
        ("📖", t.all_chapters, t.feature_chapters_desc),
        ("🌐", t.feature_languages, t.feature_languages_desc),
        ("🪔", t.wisdom, t.feature_wisdom_desc),
        ("🙏", t.feature_everyone, t.feature_everyone_desc),
    ];
    for (icon, title, description) in feature_cards {
        body.push_str(&format!(
            r#"<section class="card" style="text-align:center">
<div style="font-size:2rem">{icon}</div>
<h3>{title}</h3>
<p class="muted">{description}</p>
</section>"#,
            icon = icon,
            title = esc(title),
            description = esc(description),
        ));
    }
    body.push_str("</div>");

    // Chapter spotlight: the first chapter in full, with number chips
    // linking to each of the eighteen.
    if let Some(spotlight) = store.chapter(1) {
        let chips: String = store
            .chapters()
            .iter()
            .map(|c| {
                format!(
                    r#"<a class="pill" style="text-decoration:none;margin:2px" href="{}">{}</a>"#,
                    href(&chapter_path(c.number), language),
                    c.number
                )
            })
            .collect();
        body.push_str(&format!(
            r#"<section class="card">
<h2 style="text-align:center">{heading}</h2>
<p class="muted" style="text-align:center">{heading_desc}</p>
<span class="pill">{number}</span>
<h3 class="devanagari" style="margin:10px 0 0">{name_hindi}</h3>
<p style="margin:4px 0"><strong>{name_english}</strong></p>
<p><em>{subtitle}</em></p>
<p class="muted">{verses} {verses_label} · {theme}</p>
<h4>{overview_label}</h4>
<p>{description}</p>
<p><a class="btn" href="{link}">{read_more} →</a></p>
<div style="text-align:center">{chips}</div>
</section>"#,
            heading = esc(t.all_chapters),
            heading_desc = esc(t.all_chapters_desc),
            number = spotlight.number,
            name_hindi = esc(&spotlight.name_hindi),
            name_english = esc(&spotlight.name_english),
            subtitle = esc(&spotlight.subtitle),
            verses = spotlight.verses,
            verses_label = esc(t.verses),
            theme = esc(&spotlight.theme),
            overview_label = esc(t.chapter_overview),
            description = esc(spotlight.description.resolve(language)),
            link = href(&chapter_path(spotlight.number), language),
            read_more = esc(t.read_more),
            chips = chips,
        ));
    }

    // Daily shloka spotlight: the seeded Karma Yoga verse.
    if let crate::services::store::VerseLookup::Found(shloka) = store.verse(2, 47) {
        body.push_str(&format!(
            r#"<section class="card" style="text-align:center">
<blockquote class="devanagari">{sanskrit}</blockquote>
<p><em>{transliteration}</em></p>
<p>{translation}</p>
<p><a class="btn alt" href="{link}">{read}</a></p>
</section>"#,
            sanskrit = esc(&shloka.sanskrit),
            transliteration = esc(&shloka.transliteration),
            translation = esc(shloka.translation.resolve(language)),
            link = href(&verse_path(2, 47), language),
            read = esc(t.start_reading),
        ));
    }

    body.push_str(&format!(
        r#"<section class="card" style="display:flex;text-align:center;gap:20px">
<div style="flex:1"><div class="stat">{chapter_count}</div><div>{chapters_label}</div></div>
<div style="flex:1"><div class="stat">{verse_count}</div><div>{verses_label}</div></div>
<div style="flex:1"><div class="stat">∞</div><div>{wisdom}</div></div>
</section>"#,
        chapter_count = store.chapters().len(),
        chapters_label = esc(t.all_chapters),
        verse_count = store.total_declared_verses(),
        verses_label = esc(t.verses),
        wisdom = esc(t.wisdom),
    ));

    body.push_str(&format!(
        r#"<section class="card" style="text-align:center">
<h2>{begin}</h2>
<a class="btn" href="{first}">{start}</a>
</section>"#,
        begin = esc(t.begin_journey),
        first = href(&chapter_path(1), language),
        start = esc(t.start_reading),
    ));

    layout(language, "/", t.home, &body)
}

pub fn chapter_index(store: &ContentStore, language: Language) -> String {
    let t = i18n::ui(language);
    let mut cards = String::new();
    for chapter in store.chapters() {
        cards.push_str(&format!(
            r#"<a class="card" style="display:block;text-decoration:none;color:inherit" href="{link}">
<span class="pill">{number}</span>
<h3 class="devanagari" style="margin:10px 0 4px">{name_hindi}</h3>
<p style="margin:0"><strong>{name_english}</strong></p>
<p class="muted" style="margin:4px 0">{subtitle}</p>
<p class="muted" style="margin:0">{verses} {verses_label} · {theme}</p>
</a>"#,
            link = href(&chapter_path(chapter.number), language),
            number = chapter.number,
            name_hindi = esc(&chapter.name_hindi),
            name_english = esc(&chapter.name_english),
            subtitle = esc(&chapter.subtitle),
            verses = chapter.verses,
            verses_label = esc(t.verses),
            theme = esc(&chapter.theme),
        ));
    }
    let body = format!(
        r#"<h1>{title}</h1>
<p class="muted">{desc}</p>
<div class="grid">{cards}</div>"#,
        title = esc(t.all_chapters),
        desc = esc(t.all_chapters_desc),
        cards = cards,
    );
    layout(language, "/chapters", t.chapters, &body)
}

/// Renders whichever view the navigation parameters resolved to.
pub fn render_page_view(view: &PageView<'_>, language: Language) -> String {
    match view {
        PageView::ChapterOverview { chapter, prev, next } => {
            chapter_overview(chapter, *prev, *next, language)
        }
        PageView::VerseDetail {
            chapter,
            shloka,
            prev,
            next,
        } => verse_detail(chapter, shloka, *prev, *next, language),
        PageView::VerseNotYetAuthored { chapter, verse } => {
            verse_not_yet_authored(chapter, *verse, language)
        }
        PageView::VerseOutOfRange { chapter } => verse_out_of_range(chapter, language),
        PageView::ChapterNotFound => chapter_not_found(language),
    }
}

fn chapter_overview(
    chapter: &Chapter,
    prev: Option<u32>,
    next: Option<u32>,
    language: Language,
) -> String {
    let t = i18n::ui(language);
    let mut body = format!(
        r#"<p><a class="nav-link" style="color:#b45309" href="{back}">← {back_label}</a></p>
<section class="card">
<span class="pill">{number}</span>
<h1 class="devanagari" style="margin:10px 0 0">{name_hindi}</h1>
<h2 style="margin:4px 0">{name_english}</h2>
<p class="devanagari muted" style="margin:0">{name_sanskrit}</p>
<p><em>{subtitle}</em></p>
<p class="muted">{verses} {verses_label} · <span class="pill">{theme}</span></p>
</section>
<section class="card">
<h2>{overview_label}</h2>
<p>{description}</p>
</section>"#,
        back = href("/chapters", language),
        back_label = esc(t.back_to_chapters),
        number = chapter.number,
        name_hindi = esc(&chapter.name_hindi),
        name_english = esc(&chapter.name_english),
        name_sanskrit = esc(&chapter.name_sanskrit),
        subtitle = esc(&chapter.subtitle),
        verses = chapter.verses,
        verses_label = esc(t.verses),
        theme = esc(&chapter.theme),
        overview_label = esc(t.chapter_overview),
        description = esc(chapter.description.resolve(language)),
    );

    if let Some(teachings) = &chapter.key_teachings {
        let items: String = teachings
            .resolve(language)
            .iter()
            .map(|item| format!("<li>{}</li>", esc(item)))
            .collect();
        body.push_str(&format!(
            r#"<section class="card"><h2>{label}</h2><ul>{items}</ul></section>"#,
            label = esc(t.key_teachings),
            items = items,
        ));
    }

    // Embedded by reference only; nothing is fetched server-side.
    if let Some(video_id) = &chapter.youtube_video_id {
        body.push_str(&format!(
            r#"<section class="card">
<h2>{label}</h2>
<iframe src="https://www.youtube.com/embed/{id}" allowfullscreen></iframe>
</section>"#,
            label = esc(t.video_lectures),
            id = esc(video_id),
        ));
    }

    body.push_str(&format!("<h2>{}</h2>", esc(t.verses)));
    if chapter.shlokas.is_empty() {
        body.push_str(&format!(
            r#"<p class="muted">{}</p>"#,
            esc(t.verse_not_yet_authored)
        ));
    }
    for shloka in &chapter.shlokas {
        body.push_str(&format!(
            r#"<section class="card">
<h3>{shloka_label} {number}</h3>
<p class="devanagari">{sanskrit}</p>
<p><em>{transliteration}</em></p>
<p>{translation}</p>
<a class="btn alt" href="{link}">{read} →</a>
</section>"#,
            shloka_label = esc(t.shloka),
            number = shloka.number,
            sanskrit = esc(&shloka.sanskrit),
            transliteration = esc(&shloka.transliteration),
            translation = esc(shloka.translation.resolve(language)),
            link = href(&verse_path(chapter.number, shloka.number), language),
            read = esc(t.commentary),
        ));
    }

    body.push_str(&nav_row(
        prev.map(|p| (href(&chapter_path(p), language), t.previous_chapter)),
        next.map(|n| (href(&chapter_path(n), language), t.next_chapter)),
    ));

    layout(
        language,
        &chapter_path(chapter.number),
        &chapter.name_english,
        &body,
    )
}

fn verse_detail(
    chapter: &Chapter,
    shloka: &Shloka,
    prev: Option<u32>,
    next: Option<u32>,
    language: Language,
) -> String {
    let t = i18n::ui(language);
    let mut body = format!(
        r#"<p><a class="nav-link" style="color:#b45309" href="{back}">← {chapter_name}</a></p>
<section class="card">
<h1>{shloka_label} {chapter_number}.{number}</h1>
<p class="devanagari">{sanskrit}</p>
<h2>{transliteration_label}</h2>
<p><em>{transliteration}</em></p>
<h2>{translation_label}</h2>
<p>{translation}</p>
<h2>{commentary_label}</h2>
<p>{commentary}</p>
</section>"#,
        back = href(&chapter_path(chapter.number), language),
        chapter_name = esc(&chapter.name_english),
        shloka_label = esc(t.shloka),
        chapter_number = chapter.number,
        number = shloka.number,
        sanskrit = esc(&shloka.sanskrit),
        transliteration_label = esc(t.transliteration),
        transliteration = esc(&shloka.transliteration),
        translation_label = esc(t.translation),
        translation = esc(shloka.translation.resolve(language)),
        commentary_label = esc(t.commentary),
        commentary = esc(shloka.commentary.resolve(language)),
    );

    if let Some(audio) = &shloka.audio_url {
        body.push_str(&format!(
            r#"<section class="card"><audio controls src="{}"></audio></section>"#,
            esc(audio)
        ));
    }

    body.push_str(&nav_row(
        prev.map(|p| (href(&verse_path(chapter.number, p), language), t.previous_verse)),
        next.map(|n| (href(&verse_path(chapter.number, n), language), t.next_verse)),
    ));

    let title = format!("{} {}.{}", t.shloka, chapter.number, shloka.number);
    layout(
        language,
        &verse_path(chapter.number, shloka.number),
        &title,
        &body,
    )
}

fn nav_row(prev: Option<(String, &str)>, next: Option<(String, &str)>) -> String {
    let mut row = String::from(r#"<div class="nav-row">"#);
    if let Some((link, label)) = prev {
        row.push_str(&format!(r#"<a class="btn" href="{}">{}</a>"#, link, esc(label)));
    }
    if let Some((link, label)) = next {
        row.push_str(&format!(r#"<a class="btn" href="{}">{}</a>"#, link, esc(label)));
    }
    row.push_str("</div>");
    row
}

pub fn chapter_not_found(language: Language) -> String {
    let t = i18n::ui(language);
    let body = format!(
        r#"<section class="card" style="text-align:center">
<h1>{title}</h1>
<a class="btn" href="{back}">{back_label}</a>
</section>"#,
        title = esc(t.chapter_not_found),
        back = href("/chapters", language),
        back_label = esc(t.back_to_chapters),
    );
    layout(language, "/chapters", t.chapter_not_found, &body)
}

fn verse_out_of_range(chapter: &Chapter, language: Language) -> String {
    let t = i18n::ui(language);
    let body = format!(
        r#"<section class="card" style="text-align:center">
<h1>{title}</h1>
<p class="muted">{name}: 1–{declared} {verses_label}</p>
<a class="btn" href="{back}">{back_label}</a>
</section>"#,
        title = esc(t.verse_out_of_range),
        name = esc(&chapter.name_english),
        declared = chapter.verses,
        verses_label = esc(t.verses),
        back = href(&chapter_path(chapter.number), language),
        back_label = esc(t.back_to_chapters),
    );
    layout(language, &chapter_path(chapter.number), t.verse_out_of_range, &body)
}

fn verse_not_yet_authored(chapter: &Chapter, verse: u32, language: Language) -> String {
    let t = i18n::ui(language);
    let body = format!(
        r#"<section class="card" style="text-align:center">
<h1>{shloka_label} {chapter_number}.{verse}</h1>
<p class="muted">{message}</p>
<a class="btn" href="{back}">{back_label}</a>
</section>"#,
        shloka_label = esc(t.shloka),
        chapter_number = chapter.number,
        verse = verse,
        message = esc(t.verse_not_yet_authored),
        back = href(&chapter_path(chapter.number), language),
        back_label = esc(t.back_to_chapters),
    );
    layout(
        language,
        &verse_path(chapter.number, verse),
        t.verse_not_yet_authored,
        &body,
    )
}

pub fn gallery(store: &ContentStore, language: Language) -> String {
    let t = i18n::ui(language);
    let mut cards = String::new();
    for image in store.gallery() {
        let title = match language {
            Language::Hi | Language::Sa => &image.title_hindi,
            Language::En => &image.title,
        };
        cards.push_str(&format!(
            r#"<figure class="card" style="margin:0">
<img src="{url}" alt="{alt}" style="width:100%;border-radius:12px">
<figcaption><strong>{title}</strong><br><span class="muted">{desc}</span></figcaption>
</figure>"#,
            url = esc(&image.url),
            alt = esc(&image.title),
            title = esc(title),
            desc = esc(&image.description),
        ));
    }
    let body = format!(
        r#"<h1>{title}</h1><div class="grid">{cards}</div>"#,
        title = esc(t.gallery),
        cards = cards,
    );
    layout(language, "/gallery", t.gallery, &body)
}

pub const DONATION_AMOUNTS: [u32; 6] = [100, 500, 1000, 2000, 5000, 10000];

pub fn donate(language: Language, error: Option<&str>) -> String {
    let t = i18n::ui(language);
    let error_banner = error
        .map(|msg| format!(r#"<div class="error">{}</div>"#, esc(msg)))
        .unwrap_or_default();
    let amount_options: String = DONATION_AMOUNTS
        .iter()
        .map(|amt| format!(r#"<option value="{amt}">₹{amt}</option>"#))
        .collect();
    let body = format!(
        r#"<h1>{title}</h1>
<p class="muted">{desc}</p>
{error_banner}
<section class="card">
<form method="post" action="{action}">
<label for="amount">₹</label>
<select id="amount" name="amount">
<option value="">—</option>
{amount_options}
</select>
<label for="custom_amount">₹ (custom)</label>
<input id="custom_amount" name="custom_amount" inputmode="numeric">
<label for="payment_method">💳</label>
<select id="payment_method" name="payment_method">
<option value="">—</option>
<option value="card">Card</option>
<option value="upi">UPI</option>
<option value="netbanking">Net Banking</option>
</select>
<p><button class="btn" type="submit">{donate_label}</button></p>
</form>
</section>"#,
        title = esc(t.support),
        desc = esc(t.support_desc),
        error_banner = error_banner,
        action = href("/donate", language),
        amount_options = amount_options,
        donate_label = esc(t.donate),
    );
    layout(language, "/donate", t.donate, &body)
}

/// Transient acknowledgment only; no payment is processed or recorded.
pub fn donate_ack(language: Language, amount: u32) -> String {
    let t = i18n::ui(language);
    let body = format!(
        r#"<section class="card" style="text-align:center">
<div style="font-size:3rem">🙏</div>
<h1>{thanks}</h1>
<p class="stat">₹{amount}</p>
<a class="btn" href="{back}">{back_label}</a>
</section>"#,
        thanks = esc(t.donation_thanks),
        amount = amount,
        back = href("/", language),
        back_label = esc(t.back_home),
    );
    layout(language, "/donate", t.donation_thanks, &body)
}

pub fn admin_login(language: Language, failed: bool) -> String {
    let t = i18n::ui(language);
    let error_banner = if failed {
        format!(r#"<div class="error">{}</div>"#, esc(t.invalid_password))
    } else {
        String::new()
    };
    let body = format!(
        r#"<section class="card" style="max-width:420px;margin:40px auto;text-align:center">
<div style="font-size:3rem">ॐ</div>
<h1>{title}</h1>
{error_banner}
<form method="post" action="{action}">
<label for="password" style="text-align:left">{password_label}</label>
<input id="password" name="password" type="password">
<p><button class="btn" type="submit">{login_label}</button></p>
</form>
</section>"#,
        title = esc(t.admin_panel),
        error_banner = error_banner,
        action = href("/admin/login", language),
        password_label = esc(t.password),
        login_label = esc(t.login),
    );
    layout(language, "/admin", t.admin_panel, &body)
}

/// The dashboard lists the store's current shape; its save control only
/// produces a transient acknowledgment, nothing is persisted.
pub fn admin_dashboard(store: &ContentStore, language: Language, notice: Option<&str>) -> String {
    let t = i18n::ui(language);
    let notice_banner = notice
        .map(|msg| format!(r#"<div class="notice">{}</div>"#, esc(msg)))
        .unwrap_or_default();
    let mut rows = String::new();
    for chapter in store.chapters() {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{} / {}</td></tr>",
            chapter.number,
            esc(&chapter.name_english),
            esc(&chapter.theme),
            chapter.shlokas.len(),
            chapter.verses,
        ));
    }
    let body = format!(
        r#"<h1>{title}</h1>
{notice_banner}
<section class="card">
<table style="width:100%;border-collapse:collapse" border="0">
<tr><th>#</th><th>{chapters_label}</th><th></th><th>{verses_label}</th></tr>
{rows}
</table>
</section>
<section class="card" style="display:flex;gap:16px">
<form method="post" action="{save_action}">
<input type="hidden" name="section" value="chapters">
<button class="btn" type="submit">💾</button>
</form>
<form method="post" action="{logout_action}">
<button class="btn alt" type="submit">{logout_label}</button>
</form>
</section>"#,
        title = esc(t.admin_panel),
        notice_banner = notice_banner,
        chapters_label = esc(t.chapters),
        verses_label = esc(t.verses),
        rows = rows,
        save_action = href("/admin/save", language),
        logout_action = href("/admin/logout", language),
        logout_label = esc(t.logout),
    );
    layout(language, "/admin", t.admin_panel, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::nav::resolve_view;

    fn store() -> ContentStore {
        ContentStore::new().expect("seed table is valid")
    }

    #[test]
    fn chapter_one_overview_omits_previous_navigation() {
        let store = store();
        let page = render_page_view(&resolve_view(&store, "1", None), Language::En);
        assert!(!page.contains("Previous Chapter"));
        assert!(page.contains("Next Chapter"));
    }

    #[test]
    fn chapter_eighteen_overview_omits_next_navigation() {
        let store = store();
        let page = render_page_view(&resolve_view(&store, "18", None), Language::En);
        assert!(page.contains("Previous Chapter"));
        assert!(!page.contains("Next Chapter"));
    }

    #[test]
    fn verse_detail_renders_the_selected_language() {
        let store = store();
        let page = render_page_view(&resolve_view(&store, "2", Some("47")), Language::Hi);
        assert!(page.contains("तुम्हारा कर्म करने में अधिकार है"));
        let page = render_page_view(&resolve_view(&store, "2", Some("47")), Language::En);
        assert!(page.contains("You have a right to perform your prescribed duty"));
    }

    #[test]
    fn sanskrit_selection_falls_back_to_english_prose() {
        let store = store();
        let page = render_page_view(&resolve_view(&store, "2", Some("47")), Language::Sa);
        assert!(page.contains("You have a right to perform your prescribed duty"));
    }

    #[test]
    fn unauthored_and_out_of_range_render_distinct_messages() {
        let store = store();
        let unauthored = render_page_view(&resolve_view(&store, "2", Some("5")), Language::En);
        let out_of_range = render_page_view(&resolve_view(&store, "2", Some("73")), Language::En);
        assert!(unauthored.contains("has not been added yet"));
        assert!(out_of_range.contains("outside the chapter"));
        assert!(!out_of_range.contains("has not been added yet"));
    }

    #[test]
    fn home_renders_features_and_chapter_spotlight() {
        let store = store();
        let page = home(&store, Language::En);
        assert!(page.contains("Multiple Languages"));
        assert!(page.contains("For Everyone"));
        // Chapter 1 is spotlighted, with chips linking to all eighteen.
        assert!(page.contains("Arjuna Vishada Yoga"));
        assert!(page.contains(r#"href="/chapters/18?lang=en""#));
    }

    #[test]
    fn home_features_follow_the_selected_language() {
        let store = store();
        let page = home(&store, Language::Hi);
        assert!(page.contains("कई भाषाएं"));
        assert!(page.contains("सभी के लिए"));
    }

    #[test]
    fn chapter_index_lists_all_eighteen_chapters() {
        let store = store();
        let page = chapter_index(&store, Language::En);
        for chapter in store.chapters() {
            assert!(page.contains(&chapter.name_english));
        }
    }
}
