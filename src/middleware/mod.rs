/*
 * Responsibility
 * - middleware の公開インターフェース
 * - guard: ルートガード (認可リダイレクト)
 * - http / cors / security_headers: 横断的な HTTP 関心事
 */
pub mod cors;
pub mod guard;
pub mod http;
pub mod security_headers;
