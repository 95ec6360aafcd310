use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::state::AppState;

const SHARED_STYLE: &str = r##"
    body { font-family: system-ui, sans-serif; margin: 0; background: #f3f4f6; color: #1f2937; }
    .wrap { max-width: 960px; margin: 0 auto; padding: 2rem; }
    a.button, button { background: #2563eb; color: #fff; border: 0; border-radius: 6px;
      padding: 0.6rem 1.2rem; font-weight: 600; cursor: pointer; text-decoration: none; }
    button:disabled { opacity: 0.5; }
    #toast { position: fixed; top: 1rem; right: 1rem; padding: 0.8rem 1.2rem; border-radius: 6px;
      color: #fff; display: none; }
    #toast.ok { background: #16a34a; } #toast.err { background: #dc2626; }
"##;

const LANDING_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>My Recipe &amp; Meal Planner</title>
<style>__STYLE__
    .hero { min-height: 100vh; display: flex; align-items: center; justify-content: center;
      text-align: center; background: #111827; color: #fff; }
</style>
</head>
<body>
<main class="hero">
  <div>
    <h1>Your Smart Recipe &amp; Meal Planner</h1>
    <p>Simplify your cooking, reduce food waste, and plan delicious meals effortlessly.</p>
    <a class="button" href="/dashboard">Go to Your Dashboard</a>
  </div>
</main>
</body>
</html>
"##;

const DASHBOARD_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Your Recipes</title>
<style>__STYLE__
    .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.5rem; }
    .card { background: #fff; border-radius: 8px; overflow: hidden; box-shadow: 0 1px 3px rgba(0,0,0,0.15); }
    .card img { width: 100%; height: 180px; object-fit: cover; display: block; }
    .card .body { padding: 1rem; }
    .card .meta { display: flex; justify-content: space-between; color: #6b7280; font-size: 0.85rem; }
    header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem; }
</style>
</head>
<body>
<div class="wrap">
  <header>
    <h1>Your Recipes</h1>
    <a class="button" href="/recipes/new">Add New Recipe</a>
  </header>
  <p id="status">Loading recipes...</p>
  <div class="grid" id="recipes"></div>
</div>
<div id="toast"></div>
<script>
const ALLOWED_IMAGE_HOSTS = __IMAGE_HOSTS__;
const PLACEHOLDER_IMAGE = "data:image/svg+xml," + encodeURIComponent(
  '<svg xmlns="http://www.w3.org/2000/svg" width="600" height="400">' +
  '<rect width="100%" height="100%" fill="#d1d5db"/>' +
  '<text x="50%" y="50%" fill="#6b7280" font-size="28" text-anchor="middle">No image</text></svg>');

function imageSource(imageUrl) {
  if (!imageUrl) return PLACEHOLDER_IMAGE;
  try {
    const host = new URL(imageUrl).hostname.toLowerCase();
    if (ALLOWED_IMAGE_HOSTS.includes(host)) return imageUrl;
  } catch (_) { /* fall through to placeholder */ }
  return PLACEHOLDER_IMAGE;
}

function renderCard(recipe) {
  const card = document.createElement("div");
  card.className = "card";

  const img = document.createElement("img");
  img.src = imageSource(recipe.imageUrl);
  img.alt = recipe.title;
  img.onerror = () => { img.onerror = null; img.src = PLACEHOLDER_IMAGE; };
  card.appendChild(img);

  const body = document.createElement("div");
  body.className = "body";
  const h2 = document.createElement("h2");
  h2.textContent = recipe.title;
  const desc = document.createElement("p");
  desc.textContent = recipe.description || "No description provided.";
  const meta = document.createElement("div");
  meta.className = "meta";
  for (const [label, value] of [
    ["Prep", recipe.prepTimeMinutes], ["Cook", recipe.cookTimeMinutes], ["Servings", recipe.servings],
  ]) {
    const span = document.createElement("span");
    const suffix = label === "Servings" ? "" : "min";
    span.textContent = label + ": " + (value ?? "-") + suffix;
    meta.appendChild(span);
  }
  body.append(h2, desc, meta);
  card.appendChild(body);
  return card;
}

async function loadRecipes() {
  const token = localStorage.getItem("session_token");
  if (!token) { window.location.href = "/"; return; }

  const status = document.getElementById("status");
  try {
    const response = await fetch("/api/recipes", {
      headers: { "Authorization": "Bearer " + token },
    });
    if (response.status === 401) { window.location.href = "/"; return; }
    if (!response.ok) {
      const body = await response.json().catch(() => ({}));
      throw new Error(body.error || "HTTP error " + response.status);
    }
    const recipes = await response.json();
    if (recipes.length === 0) {
      status.textContent = 'You haven\'t created any recipes yet. Click "Add New Recipe" to get started!';
      return;
    }
    status.remove();
    const grid = document.getElementById("recipes");
    for (const recipe of recipes) grid.appendChild(renderCard(recipe));
  } catch (err) {
    status.textContent = "Error: " + err.message;
  }
}

loadRecipes();
</script>
</body>
</html>
"##;

const NEW_RECIPE_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Add New Recipe</title>
<style>__STYLE__
    form { background: #fff; padding: 1.5rem; border-radius: 8px; max-width: 640px; }
    label { display: block; font-weight: 600; margin: 0.8rem 0 0.3rem; }
    input, textarea { width: 100%; box-sizing: border-box; padding: 0.5rem;
      border: 1px solid #d1d5db; border-radius: 4px; }
    .row { display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 1rem; }
    .actions { margin-top: 1.5rem; display: flex; justify-content: space-between; }
    .actions .cancel { background: #9ca3af; }
    .req { color: #dc2626; }
</style>
</head>
<body>
<div class="wrap">
  <h1>Add New Recipe</h1>
  <form id="recipe-form">
    <label for="title">Title <span class="req">*</span></label>
    <input type="text" id="title">
    <label for="description">Description</label>
    <textarea id="description" rows="3"></textarea>
    <label for="instructions">Instructions <span class="req">*</span></label>
    <textarea id="instructions" rows="6"></textarea>
    <div class="row">
      <div>
        <label for="prepTimeMinutes">Prep Time (min)</label>
        <input type="number" min="0" id="prepTimeMinutes">
      </div>
      <div>
        <label for="cookTimeMinutes">Cook Time (min)</label>
        <input type="number" min="0" id="cookTimeMinutes">
      </div>
      <div>
        <label for="servings">Servings</label>
        <input type="number" min="0" id="servings">
      </div>
    </div>
    <div class="row">
      <div>
        <label for="category">Category</label>
        <input type="text" id="category">
      </div>
      <div>
        <label for="cuisine">Cuisine</label>
        <input type="text" id="cuisine">
      </div>
      <div>
        <label for="difficulty">Difficulty</label>
        <input type="text" id="difficulty">
      </div>
    </div>
    <label for="imageUrl">Image URL (optional)</label>
    <input type="url" id="imageUrl" placeholder="e.g., https://example.com/dish.jpg">
    <div class="actions">
      <button type="submit" id="submit">Add Recipe</button>
      <button type="button" class="cancel" onclick="history.back()">Cancel</button>
    </div>
  </form>
</div>
<div id="toast"></div>
<script>
function toast(message, ok) {
  const el = document.getElementById("toast");
  el.textContent = message;
  el.className = ok ? "ok" : "err";
  el.style.display = "block";
  setTimeout(() => { el.style.display = "none"; }, 3000);
}

function text(id) { return document.getElementById(id).value.trim(); }
function number(id) {
  const raw = document.getElementById(id).value;
  return raw === "" ? undefined : Number(raw);
}

document.getElementById("recipe-form").addEventListener("submit", async (event) => {
  event.preventDefault();

  // Mirrors the server-side required-field check.
  if (!text("title") || !text("instructions")) {
    toast("Title and Instructions are required!", false);
    return;
  }

  const token = localStorage.getItem("session_token");
  if (!token) { window.location.href = "/"; return; }

  const submit = document.getElementById("submit");
  submit.disabled = true;
  submit.textContent = "Adding Recipe...";
  try {
    const response = await fetch("/api/recipes", {
      method: "POST",
      headers: {
        "Content-Type": "application/json",
        "Authorization": "Bearer " + token,
      },
      body: JSON.stringify({
        title: text("title"),
        description: text("description") || undefined,
        instructions: text("instructions"),
        prepTimeMinutes: number("prepTimeMinutes"),
        cookTimeMinutes: number("cookTimeMinutes"),
        servings: number("servings"),
        category: text("category") || undefined,
        cuisine: text("cuisine") || undefined,
        difficulty: text("difficulty") || undefined,
        imageUrl: text("imageUrl") || undefined,
      }),
    });
    if (!response.ok) {
      const body = await response.json().catch(() => ({}));
      throw new Error(body.error || "Failed to add recipe.");
    }
    toast("Recipe added successfully!", true);
    window.location.href = "/dashboard";
  } catch (err) {
    toast(err.message || "Something went wrong!", false);
  } finally {
    submit.disabled = false;
    submit.textContent = "Add Recipe";
  }
});
</script>
</body>
</html>
"##;

pub async fn landing() -> Html<String> {
    Html(LANDING_HTML.replace("__STYLE__", SHARED_STYLE))
}

#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let hosts =
        serde_json::to_string(&state.config.image_hosts).unwrap_or_else(|_| "[]".to_string());
    Html(
        DASHBOARD_HTML
            .replace("__STYLE__", SHARED_STYLE)
            .replace("__IMAGE_HOSTS__", &hosts),
    )
}

pub async fn new_recipe() -> Html<String> {
    Html(NEW_RECIPE_HTML.replace("__STYLE__", SHARED_STYLE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn landing_links_to_the_dashboard() {
        let Html(body) = landing().await;
        assert!(body.contains(r#"href="/dashboard""#));
        assert!(!body.contains("__STYLE__"));
    }

    #[tokio::test]
    async fn dashboard_embeds_the_configured_image_allow_list() {
        let Html(body) = dashboard(State(AppState::fake())).await;
        assert!(body.contains(r#"const ALLOWED_IMAGE_HOSTS = ["example.com"];"#));
        assert!(body.contains("PLACEHOLDER_IMAGE"));
        assert!(!body.contains("__IMAGE_HOSTS__"));
    }

    #[tokio::test]
    async fn form_page_has_the_required_fields_and_submit_target() {
        let Html(body) = new_recipe().await;
        assert!(body.contains(r#"id="title""#));
        assert!(body.contains(r#"id="instructions""#));
        assert!(body.contains(r#"fetch("/api/recipes""#));
        assert!(body.contains("Title and Instructions are required!"));
    }
}
