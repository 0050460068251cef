use constcat::concat;

mod components;
mod sections;
mod variables;

use components::BASE_COMPONENTS;
use sections::SECTION_STYLES;
use variables::CSS_VARIABLES;

// everything the site needs, in one sheet
pub const SITE_STYLES: &str = concat!(
    r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--primary-color);
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Navigation */
.app-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 30;
  transition: background-color var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.app-header.scrolled {
  background-color: var(--surface-glass);
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow-md);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  max-width: var(--container-width);
  margin: 0 auto;
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-4);
}

.logo-link {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 1.25rem;
  font-weight: 800;
  color: var(--text-primary);
}

.nav-links {
  display: flex;
  gap: var(--space-2);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary-color);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.theme-menu {
  position: relative;
}

.theme-dropdown {
  position: absolute;
  right: 0;
  top: calc(100% + var(--space-2));
  min-width: 200px;
  padding: var(--space-2);
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
}

.theme-option {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  width: 100%;
  padding: var(--space-2);
  border: none;
  border-radius: var(--radius-md);
  background: none;
  color: var(--text-primary);
  cursor: pointer;
}

.theme-option.active {
  background-color: var(--neutral-100);
  color: var(--neutral-900);
}

.theme-swatch {
  width: 16px;
  height: 16px;
  border-radius: 50%;
}

.mobile-only,
.mobile-menu {
  display: none;
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .mobile-only { display: inline-block; }
  .mobile-menu {
    display: flex;
    flex-direction: column;
    padding: var(--space-4);
    background-color: var(--surface);
  }
}
"#,
    SECTION_STYLES
);
