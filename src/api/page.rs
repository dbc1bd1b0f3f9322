use axum::response::Html;

/// Minimal front end: one token field that posts to the personal info
/// endpoint and lists whatever comes back.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Oura Personal Data</title>
<style>
body { font-family: sans-serif; max-width: 28rem; margin: 4rem auto; }
input, button { width: 100%; padding: .5rem; margin: .25rem 0; box-sizing: border-box; }
#error { color: #b00020; }
dt { font-weight: bold; }
</style>
</head>
<body>
<h1>Oura Personal Data</h1>
<label for="token">Personal Access Token</label>
<input id="token" type="password" placeholder="Enter your Oura PAT...">
<button id="fetch">Fetch Personal Info</button>
<p id="error" hidden></p>
<dl id="info" hidden></dl>
<p>Get your Personal Access Token from
<a href="https://cloud.ouraring.com/personal-access-tokens" target="_blank" rel="noopener noreferrer">cloud.ouraring.com</a></p>
<script>
const button = document.getElementById("fetch");
const errorBox = document.getElementById("error");
const info = document.getElementById("info");
button.addEventListener("click", async () => {
  const token = document.getElementById("token").value.trim();
  const body = token ? { token } : {};
  button.disabled = true;
  button.textContent = "Loading...";
  errorBox.hidden = true;
  info.hidden = true;
  try {
    const res = await fetch("/api/oura/personal-info", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(body),
    });
    const data = await res.json();
    if (!res.ok) {
      errorBox.textContent = data.error;
      errorBox.hidden = false;
      return;
    }
    info.replaceChildren();
    for (const [key, value] of Object.entries(data)) {
      const dt = document.createElement("dt");
      dt.textContent = key;
      const dd = document.createElement("dd");
      dd.textContent = value;
      info.append(dt, dd);
    }
    info.hidden = false;
  } catch (e) {
    errorBox.textContent = "Request failed";
    errorBox.hidden = false;
  } finally {
    button.disabled = false;
    button.textContent = "Fetch Personal Info";
  }
});
</script>
</body>
</html>
"##;
