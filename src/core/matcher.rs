/// 地址以任一遮罩為字面前綴時回傳 true。依序比對，命中即停止；區分大小寫
pub fn matches<S: AsRef<str>>(email: &str, masks: &[S]) -> bool {
    masks.iter().any(|mask| email.starts_with(mask.as_ref()))
}
