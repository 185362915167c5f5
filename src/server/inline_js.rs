/// Client glue. Every input event is sent to `POST /edit` together with the
/// current snapshot; the response replaces the snapshot and restyles the
/// page. Requests are chained so each edit applies to the latest snapshot.
const PANEL_JS: &str = r#"
  var queue = Promise.resolve();
  var preview = document.getElementById('preview');
  var gradient = document.getElementById('preview-gradient');
  var output = document.getElementById('css-output');

  function applyResponse(resp, source) {
    state = resp.state;
    preview.style.backgroundColor = resp.preview.background;
    resp.preview.elements.forEach(function(el) {
      var node = document.getElementById(el.id);
      if (!node) return;
      node.style.fontSize = el.fontSize;
      node.style.color = el.color;
    });
    gradient.style.background = resp.preview.gradient;
    output.value = resp.css;
    Object.keys(resp.swatches).forEach(function(label) {
      var swatch = document.getElementById('swatch-' + label);
      if (swatch && swatch !== source) swatch.value = resp.swatches[label];
      var text = document.getElementById('text-' + label);
      if (text && text !== source) text.value = resp.state.colors[label];
    });
  }

  function sendEdit(input) {
    var edit = {
      field: input.dataset.field,
      label: input.dataset.label,
      value: input.value
    };
    queue = queue.then(function() {
      return fetch('/edit', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ state: state, edit: edit })
      }).then(function(r) {
        if (!r.ok) throw new Error('edit rejected (' + r.status + ')');
        return r.json();
      }).then(function(resp) {
        applyResponse(resp, input);
      });
    }).catch(function(e) {
      console.error('clamp studio:', e);
    });
  }

  document.querySelectorAll('input[data-field]').forEach(function(input) {
    input.addEventListener('input', function() { sendEdit(input); });
  });

  window.downloadCss = function() {
    queue = queue.then(function() {
      return fetch('/export/css', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(state)
      }).then(function(r) {
        if (!r.ok) throw new Error('export rejected (' + r.status + ')');
        return r.blob();
      }).then(function(blob) {
        var link = document.createElement('a');
        link.href = URL.createObjectURL(blob);
        link.download = 'clamp.css';
        link.click();
        URL.revokeObjectURL(link.href);
      });
    }).catch(function(e) {
      console.error('clamp studio:', e);
    });
  };

  window.copyCss = function(btn) {
    navigator.clipboard.writeText(output.value).then(function() {
      btn.classList.add('copied');
      btn.textContent = 'Copied';
      setTimeout(function() {
        btn.classList.remove('copied');
        btn.textContent = 'Copy';
      }, 1200);
    });
  };
"#;

/// `state_json` must already be safe for a `<script>` block.
pub(super) fn build_inline_js(state_json: &str) -> String {
    let mut js = String::with_capacity(PANEL_JS.len() + state_json.len() + 64);
    js.push_str("<script>\n(function() {\n  var state = ");
    js.push_str(state_json);
    js.push(';');
    js.push_str(PANEL_JS);
    js.push_str("})();\n</script>");
    js
}
