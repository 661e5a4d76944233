//! Global CSS styles for the Card Flip board.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --void-black: #0a0a0a;
  --void-lighter: #0a0e0f;
  --void-border: #1a1a1a;

  --moss: #5a7a5a;
  --moss-glow: #7cb87c;
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  --danger: #ff3366;
  --warning: #ff9f00;

  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-3xl: 3rem;

  --transition-fast: 150ms ease;
  --transition-flip: 600ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

.app {
  max-width: 860px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.app-header {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  margin-bottom: 2rem;
}

.app-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--gold);
  text-shadow: 0 0 30px var(--gold-glow);
  letter-spacing: 0.1em;
}

.score-panel {
  display: flex;
  gap: 1.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.score-panel__score {
  color: var(--moss-glow);
}

/* === Board === */
.card-board {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(140px, 1fr));
  gap: 1.25rem;
}

.card-board__status,
.card-board__notice,
.empty-state {
  margin-top: 1rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.card-board__notice {
  color: var(--warning);
}

/* === Cards === */
.card {
  aspect-ratio: 1 / 1.618;
  perspective: 900px;
  cursor: pointer;
}

.card__inner {
  position: relative;
  width: 100%;
  height: 100%;
  transition: transform var(--transition-flip);
  transform-style: preserve-3d;
}

.card.flipped .card__inner {
  transform: rotateY(180deg);
}

.card__back,
.card__face {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  border: 1px solid var(--moss);
  border-radius: 6px;
  backface-visibility: hidden;
}

.card__back {
  background: var(--void-lighter);
  transition: box-shadow var(--transition-fast);
}

.card:not(.flipped):hover .card__back {
  box-shadow: 0 0 16px var(--cyan-glow);
}

.card__number {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  color: var(--gold);
}

.card__face {
  transform: rotateY(180deg);
  background: var(--void-black);
}

.card__question {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.difficulty-easy .card__face { border-color: var(--moss-glow); }
.difficulty-medium .card__face { border-color: var(--cyan); }
.difficulty-hard .card__face { border-color: var(--danger); }

/* === Question Panel === */
.question-panel {
  margin-top: 2rem;
  padding: 1.5rem;
  border: 1px solid var(--void-border);
  border-left: 3px solid var(--cyan);
  background: var(--void-lighter);
}

.question-panel.difficulty-easy { border-left-color: var(--moss-glow); }
.question-panel.difficulty-hard { border-left-color: var(--danger); }

.question-panel__header {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.question-panel__title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  font-style: italic;
  color: var(--gold);
}

.question-panel__question {
  margin: 1rem 0;
}

.question-panel__options {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.option-btn,
.close-btn {
  font-family: var(--font-mono);
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--moss);
  padding: 0.5rem 1rem;
  text-align: left;
  width: 100%;
  cursor: pointer;
  transition: box-shadow var(--transition-fast);
}

.close-btn {
  width: auto;
  border: none;
  font-size: var(--text-xl);
}

.option-btn:hover:not(:disabled) {
  box-shadow: 0 0 12px var(--cyan-glow);
}

.option-btn:disabled {
  opacity: 0.5;
  cursor: default;
}

.feedback {
  margin-top: 1rem;
  font-size: var(--text-sm);
}

.feedback--correct .feedback__verdict { color: var(--moss-glow); }
.feedback--wrong .feedback__verdict { color: var(--danger); }

.feedback__explanation {
  color: var(--text-secondary);
}
/* === Glossary & Result === */
.glossary-panel,
.result-panel {
  margin-bottom: 2rem;
  padding: 1.5rem;
  border: 1px solid var(--void-border);
  border-left: 3px solid var(--gold);
  background: var(--void-lighter);
}

.glossary-panel__terms {
  margin: 1rem 0;
}

.glossary-term__name,
.glossary-explanation__title {
  color: var(--cyan);
}

.glossary-term__definition,
.glossary-explanation__content {
  margin-bottom: 0.75rem;
  color: var(--text-secondary);
}

.result-panel {
  margin-top: 2rem;
}

.result-panel__score {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--moss-glow);
}

.result-panel__again,
.app-header__study {
  width: auto;
  margin-top: 1rem;
}
"#;
