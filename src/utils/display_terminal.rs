//! 터미널 출력 포맷팅 유틸리티
//!
//! 서비스 시작 시 적용된 설정을 박스 제목과 트리 형태로 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              USER DIRECTORY SERVICE              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 설정 항목 하나를 트리 형태로 출력합니다
///
/// Output:
/// ```text
///    ├─ Users endpoint: http://localhost:8081/admin/realms/master/users
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}
