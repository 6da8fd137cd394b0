//! Dashboard page

use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>COVID-19 Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  body { font-family: sans-serif; margin: 1.5rem; }
  .controls { display: flex; gap: 1rem; flex-wrap: wrap; align-items: end; }
  label { display: flex; flex-direction: column; font-size: 0.9rem; }
  #message { color: #a33; min-height: 1.2rem; margin-top: 0.8rem; }
</style>
</head>
<body>
<h1>COVID-19 Dashboard</h1>
<div class="controls">
  <label>Statistic
    <select id="stat">
      <option>Cumulative Cases</option>
      <option>Cumulative Deaths</option>
    </select>
  </label>
  <label>Country <select id="country"></select></label>
  <label>State <select id="state"></select></label>
  <label>Forecast
    <select id="horizon">
      <option value="">Off</option>
      <option value="30">30 days</option>
      <option value="60">60 days</option>
      <option value="90">90 days</option>
    </select>
  </label>
</div>
<div id="message"></div>
<div id="plot" style="height: 70vh;"></div>
<script>
const $ = (id) => document.getElementById(id);

function fill(select, values, selected) {
  select.innerHTML = "";
  for (const value of values) {
    const option = document.createElement("option");
    option.textContent = value;
    select.appendChild(option);
  }
  if (selected !== undefined) select.value = selected;
}

async function getJson(url) {
  const response = await fetch(url);
  const body = await response.json();
  if (!response.ok) throw new Error(body.message || response.statusText);
  return body;
}

async function refreshStates() {
  const params = new URLSearchParams({ country: $("country").value });
  const states = await getJson(`/api/v1/states?${params}`);
  fill($("state"), states.options, states.selected);
}

async function redraw() {
  const params = new URLSearchParams({
    country: $("country").value,
    state: $("state").value,
    stat: $("stat").value,
  });
  const horizon = $("horizon").value;
  let url = `/api/v1/graph?${params}`;
  if (horizon) {
    params.set("horizon", horizon);
    url = `/api/v1/forecast?${params}`;
  }
  $("message").textContent = horizon ? "Fitting model..." : "";
  try {
    const figure = await getJson(url);
    $("message").textContent = "";
    Plotly.react("plot", figure.data, figure.layout);
  } catch (error) {
    $("message").textContent = error.message;
    Plotly.purge("plot");
  }
}

async function init() {
  const { countries } = await getJson("/api/v1/countries");
  fill($("country"), countries, countries[0]);
  await refreshStates();
  await redraw();
  $("country").addEventListener("change", async () => { await refreshStates(); await redraw(); });
  for (const id of ["state", "stat", "horizon"]) $(id).addEventListener("change", redraw);
}

init().catch((error) => { $("message").textContent = error.message; });
</script>
</body>
</html>
"#;
