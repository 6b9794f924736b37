//! Global CSS styles for Govaim.
//!
//! Dark page background, white auth card, violet accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --page-bg: #1a1f2c;
  --card-bg: #ffffff;
  --border: #e2e8f0;

  /* Accent */
  --accent: #9b87f5;
  --accent-hover: #7e69ab;

  /* Text */
  --text-strong: #1a1f2c;
  --text-body: #374151;
  --text-muted: #4b5563;
  --text-inverse: #ffffff;

  /* Semantic */
  --danger: #ef4444;
  --danger-bg: #fef2f2;

  --radius: 0.75rem;
  --font-sans: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

body {
  margin: 0;
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-inverse);
}

/* === Auth pages === */
.auth-page {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.auth-card {
  width: 100%;
  max-width: 28rem;
  padding: 2rem;
  background: var(--card-bg);
  color: var(--text-body);
  border-radius: var(--radius);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
}

.auth-header { text-align: center; }

.auth-title {
  margin: 1.5rem 0 0;
  font-size: 1.875rem;
  font-weight: 700;
  color: var(--text-strong);
}

.auth-subtitle {
  margin-top: 0.5rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.auth-form {
  margin-top: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.auth-fields {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.auth-footer {
  margin-top: 1.5rem;
  text-align: center;
}

.auth-link {
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Inputs === */
.form-field { display: flex; flex-direction: column; }

.input-label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-body);
}

.input-field {
  margin-top: 0.25rem;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  font: inherit;
}

.input-field:focus {
  outline: 2px solid var(--accent);
  outline-offset: 1px;
}

/* === Buttons === */
.btn-primary {
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 0.375rem;
  background: var(--accent);
  color: var(--text-inverse);
  font: inherit;
  font-weight: 500;
  cursor: pointer;
}

.btn-primary:hover { background: var(--accent-hover); }

.btn-full { width: 100%; }

.btn-link {
  padding: 0;
  border: none;
  background: none;
  color: var(--accent);
  font: inherit;
  font-weight: 500;
  text-decoration: none;
  cursor: pointer;
}

.btn-link:hover { color: var(--accent-hover); }

.btn-ghost {
  padding: 0.375rem 0.75rem;
  border: 1px solid currentColor;
  border-radius: 0.375rem;
  color: inherit;
  text-decoration: none;
}

/* === Alerts === */
.alert {
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  font-size: 0.875rem;
}

.alert-destructive {
  border-color: var(--danger);
  background: var(--danger-bg);
  color: var(--danger);
}

/* === Dashboard / misc === */
.dashboard { padding: 2rem; }

.dashboard-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.page-title { margin: 0; font-size: 2rem; font-weight: 700; }

.body-text { color: rgba(255, 255, 255, 0.8); }

.not-found {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
}
"#;
