/*
 * Responsibility
 * - HTTP やフレームワークに依存しないドメイン型
 * - identity: guard と handler が共有する認証済み主体
 * - clinical: 検査室データの契約 (宣言のみ、振る舞いは持たない)
 */
pub mod clinical;
pub mod identity;

pub use clinical::HealthcareRole;
pub use identity::Identity;
