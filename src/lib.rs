//! Ядро правил техасского холдема (кеш-игра).
//!
//! Чистый движок без I/O и общего изменяемого состояния: каждая операция
//! берёт снапшот `GameState` и возвращает новый снапшот плюс
//! вспомогательные результаты. Комнаты, авторизация и персистенс живут
//! во внешнем оркестраторе — он вызывает операции движка по порядку и
//! сохраняет состояние после каждого вызова.
//!
//! Модули:
//!   - `domain` — карты, колода, фишки, игроки, улицы
//!   - `engine` — ставки, очередь хода, сайд-поты, расчёт раздачи
//!   - `eval`   — оценка силы руки (лучшие 5 карт из 5–7)
//!   - `infra`  — реализации RNG для движка

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
