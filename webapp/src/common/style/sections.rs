pub const SECTION_STYLES: &str = r#"
/* Layout */
.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.page-section,
.dashboard {
  padding: var(--space-16) 0;
  scroll-margin-top: var(--header-height);
}

.page-header {
  text-align: center;
  margin-bottom: var(--space-12);
}

.page-title {
  font-size: 3rem;
  font-weight: 800;
  background: linear-gradient(90deg, var(--amber-dark), var(--orange), var(--amber-dark));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.page-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  max-width: 720px;
  margin: var(--space-4) auto 0;
}

.section-header {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-8);
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
}

/* Hero */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  overflow: hidden;
  background: radial-gradient(circle at top, var(--accent-color), transparent 60%),
              linear-gradient(135deg, var(--background), var(--surface));
}

.hero-orbs {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.hero-orb {
  position: absolute;
  width: 160px;
  height: 160px;
  border-radius: 50%;
  background-color: var(--secondary-color);
  opacity: 0.15;
  filter: blur(40px);
  animation: float 8s ease-in-out infinite;
}

.orb-0 { top: 10%; left: 5%; }
.orb-1 { top: 20%; right: 10%; }
.orb-2 { top: 50%; left: 15%; }
.orb-3 { bottom: 10%; right: 20%; }
.orb-4 { top: 70%; left: 45%; }
.orb-5 { top: 5%; left: 60%; }
.orb-6 { bottom: 25%; left: 75%; }
.orb-7 { bottom: 5%; left: 30%; }

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-24px); }
}

.hero-content {
  position: relative;
  text-align: center;
}

.hero-title {
  font-size: 4.5rem;
  font-weight: 800;
  line-height: 1.1;
}

.hero-gradient {
  background: linear-gradient(90deg, var(--primary-color), var(--secondary-color), var(--accent-color));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  max-width: 640px;
  margin: var(--space-6) auto;
}

.hero-actions {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  margin-bottom: var(--space-12);
}

.hero-stats {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: var(--space-4);
}

.hero-stat {
  background-color: var(--surface-glass);
  border-radius: var(--radius-xl);
  padding: var(--space-6);
  box-shadow: var(--shadow-md);
}

.hero-stat-icon {
  font-size: 1.5rem;
  color: var(--primary-color);
}

.hero-stat-value {
  font-size: 2rem;
  font-weight: 800;
}

.hero-stat-label {
  color: var(--text-secondary);
}

.scroll-indicator {
  position: absolute;
  bottom: var(--space-8);
  left: 50%;
  width: 24px;
  height: 40px;
  border: 2px solid var(--text-tertiary);
  border-radius: var(--radius-full);
}

.scroll-dot {
  width: 4px;
  height: 10px;
  margin: 6px auto;
  background-color: var(--text-tertiary);
  border-radius: var(--radius-full);
  animation: float 2s ease-in-out infinite;
}

/* Dashboard */
.toolbar {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
  align-items: center;
  margin-bottom: var(--space-8);
}

.search-box {
  position: relative;
  flex: 1;
  min-width: 220px;
}

.search-box .form-input {
  padding-left: 40px;
}

.search-icon {
  position: absolute;
  left: var(--space-3);
  top: 50%;
  transform: translateY(-50%);
}

.toolbar .form-select {
  width: auto;
}

.view-toggle {
  display: flex;
  gap: var(--space-1);
}

.product-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: var(--space-6);
}

.product-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.product-card {
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-md);
  overflow: hidden;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.product-card:hover {
  transform: translateY(-4px);
}

.product-card.list {
  display: flex;
}

.product-card-image {
  position: relative;
  height: 220px;
}

.product-card.list .product-card-image {
  width: 260px;
  flex-shrink: 0;
}

.product-card-image img,
.product-hero img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.product-card-image .badge {
  position: absolute;
  top: var(--space-3);
  left: var(--space-3);
}

.like-button {
  position: absolute;
  top: var(--space-3);
  right: var(--space-3);
  border: none;
  border-radius: 50%;
  width: 36px;
  height: 36px;
  background-color: rgba(255, 255, 255, 0.9);
  cursor: pointer;
}

.like-button.liked {
  color: var(--error);
}

.product-card-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: rgba(0, 0, 0, 0.4);
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.product-card:hover .product-card-overlay {
  opacity: 1;
}

.product-card-info {
  padding: var(--space-6);
  flex: 1;
}

.product-name {
  font-size: 1.25rem;
  font-weight: 700;
}

.product-description {
  color: var(--text-secondary);
  margin: var(--space-2) 0 var(--space-4);
}

.rating-row,
.product-stats {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  margin-bottom: var(--space-3);
}

.rating-count,
.product-stat {
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

.product-stat.growth {
  color: var(--success);
}

.empty-state {
  text-align: center;
  padding: var(--space-16) 0;
}

.empty-icon {
  font-size: 3rem;
}

.empty-note {
  color: var(--text-tertiary);
  text-align: center;
}

.floating-button {
  position: fixed;
  right: var(--space-8);
  bottom: var(--space-8);
  width: 56px;
  height: 56px;
  border: none;
  border-radius: 50%;
  font-size: 1.5rem;
  background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));
  box-shadow: var(--shadow-lg);
  cursor: pointer;
  z-index: 40;
}

/* Product details */
.product-hero {
  position: relative;
  height: 260px;
  border-radius: var(--radius-lg);
  overflow: hidden;
}

.product-hero .badge {
  position: absolute;
  top: var(--space-3);
  left: var(--space-3);
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: var(--space-3);
  margin: var(--space-6) 0;
}

.stat-tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--background);
}

.stat-value {
  font-size: 1.5rem;
  font-weight: 700;
}

.stat-label {
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

.tasting-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-6);
  margin-top: var(--space-3);
}

.spec-list {
  display: grid;
  grid-template-columns: auto 1fr;
  gap: var(--space-1) var(--space-4);
}

.spec-list dt {
  color: var(--text-tertiary);
}

/* Feedback */
.list-controls {
  display: flex;
  gap: var(--space-3);
}

.feedback-items {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.feedback-card {
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-md);
  padding: var(--space-6);
}

.feedback-card-header {
  display: flex;
  justify-content: space-between;
  gap: var(--space-4);
}

.feedback-title {
  font-size: 1.125rem;
  font-weight: 700;
}

.feedback-description {
  color: var(--text-secondary);
  margin-top: var(--space-2);
}

.feedback-meta {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  margin: var(--space-4) 0;
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

.feedback-actions {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.vote-buttons {
  display: flex;
  gap: var(--space-2);
}

.vote-button {
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background: none;
  color: var(--text-secondary);
  padding: var(--space-1) var(--space-3);
  cursor: pointer;
}

.vote-button.up:hover { color: var(--success); }
.vote-button.down:hover { color: var(--error); }

.badge-row,
.meta-grid,
.engagement-grid {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
}

.meta-label,
.engagement-label {
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

.engagement-value {
  font-size: 1.25rem;
  font-weight: 700;
}

/* Roadmap */
.quarter-selector {
  display: flex;
  justify-content: center;
  gap: var(--space-3);
  margin-bottom: var(--space-8);
}

.quarter-button {
  border: none;
  border-radius: var(--radius-lg);
  padding: var(--space-3) var(--space-6);
  background: none;
  color: var(--text-secondary);
  font-weight: 600;
  cursor: pointer;
}

.quarter-button.active {
  background: linear-gradient(90deg, var(--primary-color), var(--secondary-color));
  color: var(--text-inverse);
}

.roadmap-items {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-6);
}

.roadmap-card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  padding: var(--space-6);
}

.roadmap-card-header,
.roadmap-footer,
.progress-label {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.roadmap-status {
  display: inline-flex;
  gap: var(--space-2);
  font-weight: 600;
}

.roadmap-completed .roadmap-icon { color: var(--success); }
.roadmap-in-progress .roadmap-icon { color: var(--warning); }
.roadmap-planned .roadmap-icon { color: var(--info); }

.roadmap-title {
  font-size: 1.25rem;
  font-weight: 700;
  margin: var(--space-3) 0 var(--space-2);
}

.roadmap-description {
  color: var(--text-secondary);
}

.roadmap-meta {
  display: flex;
  gap: var(--space-4);
  margin: var(--space-4) 0;
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

.progress {
  margin-bottom: var(--space-4);
}

.progress-track {
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--neutral-200);
  margin-top: var(--space-1);
}

.progress-fill {
  height: 100%;
  border-radius: var(--radius-full);
  background: linear-gradient(90deg, var(--primary-color), var(--secondary-color));
}

.roadmap-legend {
  display: flex;
  justify-content: center;
  gap: var(--space-6);
  margin-top: var(--space-12);
}

.legend-entry {
  display: inline-flex;
  gap: var(--space-2);
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: var(--space-8);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  margin-top: var(--space-6);
}

.contact-side {
  display: flex;
  flex-direction: column;
  gap: var(--space-8);
}

.contact-detail {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-top: var(--space-4);
}

.contact-icon {
  width: 48px;
  height: 48px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-lg);
  background: linear-gradient(135deg, var(--amber), var(--orange));
  color: var(--text-inverse);
}

.contact-label,
.social-name {
  font-weight: 600;
}

.contact-value,
.social-caption {
  color: var(--text-secondary);
}

.social-link {
  display: block;
  margin-top: var(--space-4);
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--background);
  color: var(--text-primary);
}

/* Not found */
.not-found {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: var(--space-4);
}

@media (max-width: 768px) {
  .hero-title { font-size: 3rem; }
  .hero-stats,
  .stats-grid { grid-template-columns: repeat(2, 1fr); }
  .contact-grid,
  .tasting-grid,
  .form-row { grid-template-columns: 1fr; }
  .product-card.list { flex-direction: column; }
  .product-card.list .product-card-image { width: 100%; }
}
"#;
