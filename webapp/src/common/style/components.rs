pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 600;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: none;
  text-decoration: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-primary {
  background: linear-gradient(90deg, var(--primary-color), var(--secondary-color));
  color: var(--text-inverse);
}

.btn-secondary {
  background-color: var(--neutral-200);
  color: var(--neutral-900);
}

.btn-light {
  background-color: rgba(255, 255, 255, 0.9);
  color: var(--neutral-900);
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.125rem;
}

.btn-block {
  width: 100%;
}

.icon-button {
  background: none;
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  color: var(--text-primary);
  padding: var(--space-2);
  cursor: pointer;
  min-width: 36px;
}

.icon-button.active {
  border-color: var(--primary-color);
  color: var(--primary-color);
}

/* Cards */
.card {
  background-color: var(--surface-glass);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-md);
  padding: var(--space-8);
}

/* Forms */
.form-group {
  margin-bottom: var(--space-4);
}

.form-label {
  display: block;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
}

.form-input,
.form-select,
.form-textarea {
  width: 100%;
  padding: var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
}

.form-input:focus,
.form-select:focus,
.form-textarea:focus {
  outline: none;
  border-color: var(--primary-color);
}

.chip-row,
.star-row,
.sentiment-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.chip,
.sentiment-button {
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  background: none;
  color: var(--text-primary);
  padding: var(--space-1) var(--space-3);
  cursor: pointer;
}

.chip.selected,
.sentiment-button.selected {
  border-color: var(--primary-color);
  background-color: var(--primary-color);
  color: var(--text-inverse);
}

.star-button {
  background: none;
  border: none;
  font-size: 1.75rem;
  color: var(--neutral-300);
  cursor: pointer;
}

.star-button.filled,
.star.filled {
  color: var(--amber);
}

.star {
  color: var(--neutral-300);
}

.spinner {
  width: 20px;
  height: 20px;
  border: 2px solid white;
  border-top-color: transparent;
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* Badges */
.badge {
  display: inline-block;
  padding: 2px var(--space-2);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 600;
}

.badge-available, .status-completed { background-color: #d1fae5; color: #065f46; }
.badge-limited, .status-in-progress { background-color: #fef3c7; color: #92400e; }
.badge-coming-soon, .status-planned { background-color: #dbeafe; color: #1e40af; }
.badge-archived, .status-rejected { background-color: #fee2e2; color: #991b1b; }

.priority-high { border-left: 4px solid var(--error); }
.priority-medium { border-left: 4px solid var(--warning); }
.priority-low { border-left: 4px solid var(--success); }

.priority-dot {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  border-left: none;
}

.priority-dot.priority-high { background-color: var(--error); }
.priority-dot.priority-medium { background-color: var(--warning); }
.priority-dot.priority-low { background-color: var(--success); }

/* Modals */
.modal-overlay {
  position: fixed;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.55);
  backdrop-filter: blur(4px);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
  padding: var(--space-4);
}

.modal-content {
  background-color: var(--surface);
  color: var(--text-primary);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-lg);
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  padding: var(--space-6);
  border-bottom: 1px solid var(--border);
}

.modal-title {
  font-size: 1.5rem;
  font-weight: 700;
}

.modal-subtitle {
  color: var(--text-secondary);
}

.btn-close {
  background: none;
  border: none;
  font-size: 1.5rem;
  color: var(--text-secondary);
  cursor: pointer;
}

.modal-body {
  padding: var(--space-6);
}

.modal-footer {
  padding: var(--space-4) var(--space-6);
  border-top: 1px solid var(--border);
}

.modal-buttons {
  display: flex;
  justify-content: flex-end;
  gap: var(--space-3);
}

.modal-error {
  color: var(--error);
}

/* Toasts */
.toast-host {
  position: fixed;
  top: calc(var(--header-height) + var(--space-4));
  right: var(--space-4);
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  z-index: 60;
}

.toast {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  color: var(--text-inverse);
  cursor: pointer;
  animation: toast-in var(--transition-normal) var(--easing-standard);
}

.toast-success { background-color: var(--success); }
.toast-error { background-color: var(--error); }

.toast-icon {
  font-weight: 700;
}

@keyframes toast-in {
  from { opacity: 0; transform: translateX(24px); }
  to { opacity: 1; transform: translateX(0); }
}
"#;
