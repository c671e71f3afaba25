//! Server-rendered HTML pages
//!
//! Pages are thin shells; the flashcard and Game of Life behaviour lives in the
//! scripts under the static directory, which talk to the JSON API.

/// Shared page chrome
fn layout(title: &str, body: &str, script: Option<&str>) -> String {
    let script_tag = script
        .map(|src| format!(r#"<script src="{src}" defer></script>"#))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
    {script_tag}
</head>
<body>
    <header>
        <a href="/home" class="brand">Projects</a>
        <nav>
            <a href="/projects/flashcard">Flashcards</a>
            <a href="/projects/flashcard/random">Random Flashcard</a>
            <a href="/projects/gol">Game of Life</a>
        </nav>
    </header>
    <main>
{body}
    </main>
</body>
</html>"#,
        css = CSS,
    )
}

/// Landing page
pub fn home_page() -> String {
    layout(
        "Home",
        r#"        <h1>Projects</h1>
        <ul class="links">
            <li><a href="/projects/flashcard">Flashcards</a></li>
            <li><a href="/projects/flashcard/random">Random Flashcard</a></li>
            <li><a href="/projects/gol">Game of Life</a></li>
        </ul>"#,
        None,
    )
}

/// Game of Life canvas and pattern picker
pub fn gol_page() -> String {
    layout(
        "Game of Life",
        r#"        <h1>Game of Life</h1>
        <div class="controls">
            <select id="patternSelect"><option value="">Random soup</option></select>
            <button id="startButton">Start</button>
            <button id="stopButton">Stop</button>
            <button id="resetButton">Reset</button>
            <span>Generation: <span id="generationCounter">0</span></span>
        </div>
        <canvas id="gameCanvas" width="800" height="600"></canvas>"#,
        Some("/static/gol.js"),
    )
}

/// Deck list with create/delete controls
pub fn decks_page() -> String {
    layout(
        "Flashcards",
        r#"        <h1>Decks</h1>
        <form id="newDeckForm" class="inline-form">
            <input id="deckName" name="name" placeholder="New deck name" required>
            <button type="submit">Create deck</button>
        </form>
        <ul id="deckList" class="deck-list"></ul>"#,
        Some("/static/js/decks.js"),
    )
}

/// One random card from all decks
pub fn random_card_page() -> String {
    layout(
        "Random Flashcard",
        &study_body("/api/flashcard", None),
        Some("/static/js/study.js"),
    )
}

/// Study the cards of a single deck
pub fn study_page(deck_id: i32) -> String {
    layout(
        "Study",
        &study_body(&format!("/api/flashcard/cards/{deck_id}"), Some(deck_id)),
        Some("/static/js/study.js"),
    )
}

/// Card editor for a deck
pub fn edit_deck_page(deck_id: i32) -> String {
    layout(
        "Edit Deck",
        &format!(
            r#"        <h1>Edit deck</h1>
        <div id="editor" data-deck-id="{deck_id}">
            <form id="newCardForm" class="card-form">
                <textarea id="cardFront" placeholder="Front" required></textarea>
                <textarea id="cardBack" placeholder="Back" required></textarea>
                <button type="submit">Add card</button>
            </form>
            <ul id="cardList" class="card-list"></ul>
        </div>
        <p><a href="/projects/flashcard/decks/{deck_id}/study">Study this deck</a></p>"#
        ),
        Some("/static/js/edit.js"),
    )
}

fn study_body(source: &str, deck_id: Option<i32>) -> String {
    let deck_attr = deck_id
        .map(|id| format!(r#" data-deck-id="{id}""#))
        .unwrap_or_default();

    format!(
        r#"        <div id="study" data-source="{source}"{deck_attr}>
            <div id="card" class="flashcard"></div>
            <button id="flipButton">Flip Card</button>
            <form id="rateForm" class="rating">
                <input type="hidden" name="ID" id="cardId">
                <label>1 <input type="radio" name="Rating" value="1"></label>
                <label>2 <input type="radio" name="Rating" value="2"></label>
                <label>3 <input type="radio" name="Rating" value="3"></label>
                <label>4 <input type="radio" name="Rating" value="4"></label>
                <label>5 <input type="radio" name="Rating" value="5"></label>
                <button type="submit">Submit Rating</button>
                <button type="button" id="skipButton">Skip Card</button>
            </form>
        </div>"#
    )
}

const CSS: &str = r#"
        body { margin: 0; font-family: system-ui, sans-serif; background: #9ca3af; }
        header { display: flex; gap: 1rem; align-items: center; padding: 1rem; background: #1f2937; }
        header a { color: #f9fafb; text-decoration: none; padding: 0.4rem 0.8rem; border-radius: 0.3rem; }
        header a:hover { background: #4b5563; }
        .brand { font-weight: bold; }
        main { max-width: 60rem; margin: 0 auto; padding: 1rem; background: #dbeafe; min-height: 80vh; }
        .flashcard { background: white; border-radius: 0.4rem; box-shadow: 0 1px 4px #0003;
                     height: 16rem; display: flex; align-items: center; justify-content: center;
                     margin-bottom: 1rem; font-size: 1.3rem; cursor: pointer; }
        .rating { margin-top: 1rem; }
        .card-form textarea { display: block; width: 100%; margin-bottom: 0.5rem; }
        .deck-list li, .card-list li { margin: 0.4rem 0; }
        canvas { background: black; display: block; margin-top: 1rem; }
"#;
